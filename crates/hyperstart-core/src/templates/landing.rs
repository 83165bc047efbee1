//! Marketing landing page: hero, features, newsletter signup and footer.
//! The page stays public with auth on; only the nav shows the signed-in user.

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::AnswerSet;

pub const COMPONENT: &str = "LandingPage";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);
    let name = ui::jsx_text(answers.project_name());

    let account = sections::account(ui, &mut imports, answers);
    let subscribe = sections::writer(ui, &mut imports, answers, "addSubscriber", "subscribers");

    let nav_account = account
        .as_ref()
        .map(|section| format!("{{user && (\n{}\n)}}", ui::indent(&section.jsx, 2)))
        .unwrap_or_default();
    let nav = ui::component(
        "Nav",
        "",
        &sections::setup([&account]),
        &fill(NAV_JSX, &[("NAME", &name), ("ACCOUNT", &nav_account)]),
        false,
    );

    let get_started = ui::button(ui, &mut imports, "Get Started", "onClick={() => document.getElementById('newsletter')?.scrollIntoView({ behavior: 'smooth' })}", Variant::Primary);
    let learn_more = ui::button(ui, &mut imports, "Learn More", "onClick={() => document.getElementById('features')?.scrollIntoView({ behavior: 'smooth' })}", Variant::Outline);
    let hero = ui::component(
        "Hero",
        "",
        "",
        &fill(
            HERO_JSX,
            &[("NAME", &name), ("PRIMARY", &get_started), ("SECONDARY", &learn_more)],
        ),
        false,
    );

    let feature_card = ui::card(
        ui,
        &mut imports,
        "key={feature.title}",
        Some("{feature.icon} {feature.title}"),
        None,
        "<p style={{ color: '#6b7280', lineHeight: '1.6' }}>{feature.description}</p>",
    );
    let features = ui::component(
        "Features",
        "",
        "",
        &fill(FEATURES_JSX, &[("FEATURE_CARD", &feature_card)]),
        false,
    );

    let email = ui::input(
        ui,
        &mut imports,
        "type=\"email\" placeholder=\"you@example.com\" value={email} onChange={(e) => setEmail(e.target.value)} required",
    );
    let submit_label = if subscribe.is_some() {
        "{saving ? 'Subscribing...' : 'Subscribe'}"
    } else {
        "Subscribe"
    };
    let submit = ui::button(ui, &mut imports, submit_label, "type=\"submit\"", Variant::Primary);
    let store = match &subscribe {
        Some(_) => "await addSubscriber({ email });",
        None => "console.info('Newsletter signup:', email);",
    };
    let newsletter = ui::component(
        "Newsletter",
        "",
        &sections::join(&[
            "const [email, setEmail] = useState('');",
            "const [subscribed, setSubscribed] = useState(false);",
            subscribe.as_deref().unwrap_or(""),
            "",
            &fill(NEWSLETTER_SETUP, &[("STORE", store)]),
        ]),
        &fill(NEWSLETTER_JSX, &[("EMAIL", &email), ("SUBMIT", &submit)]),
        false,
    );

    let footer = ui::component("Footer", "", "", &fill(FOOTER_JSX, &[("NAME", &name)]), false);

    let page = ui::component(COMPONENT, "", "", PAGE_JSX, true);

    ui::module(
        ui,
        &imports,
        &[FEATURES_DATA.to_string(), nav, hero, features, newsletter, footer, page],
    )
}

const FEATURES_DATA: &str = r#"const FEATURES = [
  { icon: '⚡', title: 'Lightning Fast', description: 'Optimized builds and instant reloads keep you in the flow.' },
  { icon: '🔒', title: 'Secure by Default', description: 'Sensible defaults and best-in-class libraries from day one.' },
  { icon: '📱', title: 'Responsive', description: 'Looks great on every screen, from phones to wide monitors.' },
  { icon: '🧩', title: 'Composable', description: 'Small, focused components you can rearrange and extend.' },
  { icon: '🌍', title: 'Global Scale', description: 'Deploy to the edge and serve users wherever they are.' },
  { icon: '💬', title: 'Great Support', description: 'Docs, guides and a community that answers questions.' },
];"#;

const NAV_JSX: &str = r##"<nav style={{ display: 'flex', justifyContent: 'space-between', alignItems: 'center', padding: '1rem 2rem', background: 'white', borderBottom: '1px solid #e5e7eb' }}>
  <span style={{ fontWeight: 'bold', fontSize: '1.25rem' }}>{{NAME}}</span>
  <div style={{ display: 'flex', gap: '1.5rem', alignItems: 'center' }}>
    <a href="#features" style={{ color: '#374151', textDecoration: 'none' }}>Features</a>
    <a href="#newsletter" style={{ color: '#374151', textDecoration: 'none' }}>Newsletter</a>
    {{ACCOUNT}}
  </div>
</nav>"##;

const HERO_JSX: &str = r#"<section style={{ background: 'linear-gradient(135deg, #667eea 0%, #764ba2 100%)', color: 'white', padding: '6rem 2rem', textAlign: 'center' }}>
  <div style={{ maxWidth: '800px', margin: '0 auto' }}>
    <h1 style={{ fontSize: '3.5rem', fontWeight: 'bold', marginBottom: '1.5rem', lineHeight: '1.2' }}>
      Build faster with {{NAME}}
    </h1>
    <p style={{ fontSize: '1.25rem', marginBottom: '2.5rem', opacity: 0.9 }}>
      Everything you need to launch your next idea, ready out of the box.
    </p>
    <div style={{ display: 'flex', gap: '1rem', justifyContent: 'center', flexWrap: 'wrap' }}>
      {{PRIMARY}}
      {{SECONDARY}}
    </div>
  </div>
</section>"#;

const FEATURES_JSX: &str = r#"<section id="features" style={{ padding: '5rem 2rem', background: '#f9fafb' }}>
  <div style={{ maxWidth: '1200px', margin: '0 auto' }}>
    <h2 style={{ fontSize: '2.5rem', fontWeight: 'bold', textAlign: 'center', marginBottom: '3rem' }}>Features</h2>
    <div style={{ display: 'grid', gridTemplateColumns: 'repeat(auto-fit, minmax(300px, 1fr))', gap: '2rem' }}>
      {FEATURES.map((feature) => (
        {{FEATURE_CARD}}
      ))}
    </div>
  </div>
</section>"#;

const NEWSLETTER_SETUP: &str = r#"const handleSubmit = async (e) => {
  e.preventDefault();
  {{STORE}}
  setSubscribed(true);
  setEmail('');
};"#;

const NEWSLETTER_JSX: &str = r#"<section id="newsletter" style={{ padding: '5rem 2rem', textAlign: 'center' }}>
  <div style={{ maxWidth: '500px', margin: '0 auto' }}>
    <h2 style={{ fontSize: '2rem', fontWeight: 'bold', marginBottom: '1rem' }}>Stay in the loop</h2>
    <p style={{ color: '#6b7280', marginBottom: '2rem' }}>Get product updates and tips straight to your inbox.</p>
    {subscribed ? (
      <p style={{ color: '#059669', fontWeight: 500 }}>Thanks for subscribing!</p>
    ) : (
      <form onSubmit={handleSubmit} style={{ display: 'flex', gap: '0.5rem' }}>
        {{EMAIL}}
        {{SUBMIT}}
      </form>
    )}
  </div>
</section>"#;

const FOOTER_JSX: &str = r##"<footer style={{ background: '#111827', color: 'white', padding: '3rem 2rem' }}>
  <div style={{ maxWidth: '1200px', margin: '0 auto', display: 'flex', justifyContent: 'space-between', flexWrap: 'wrap', gap: '2rem' }}>
    <div>
      <h3 style={{ fontSize: '1.25rem', fontWeight: 'bold', marginBottom: '0.5rem' }}>{{NAME}}</h3>
      <p style={{ color: '#9ca3af' }}>&copy; {new Date().getFullYear()} All rights reserved.</p>
    </div>
    <ul style={{ listStyle: 'none', padding: 0, display: 'flex', gap: '1.5rem', color: '#9ca3af' }}>
      <li><a href="#features" style={{ color: 'inherit', textDecoration: 'none' }}>Features</a></li>
      <li><a href="#newsletter" style={{ color: 'inherit', textDecoration: 'none' }}>Newsletter</a></li>
      <li><a href="https://github.com" style={{ color: 'inherit', textDecoration: 'none' }}>GitHub</a></li>
    </ul>
  </div>
</footer>"##;

const PAGE_JSX: &str = r#"<div>
  <Nav />
  <Hero />
  <Features />
  <Newsletter />
  <Footer />
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, CssFramework, FirebaseService, Framework, Template};

    fn render_with(name: &str, services: &[FirebaseService]) -> String {
        let mut answers = Answers::new(name, Framework::Vite, Template::Landing, CssFramework::Tailwind);
        answers.firebase_services.extend(services.iter().copied());
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_landing_stays_public_with_auth() {
        let page = render_with("Launch", &[FirebaseService::Auth]);
        assert!(!page.contains("ProtectedRoute"));
        assert!(page.contains("{user && ("));
    }

    #[test]
    fn test_newsletter_persists_only_with_database() {
        let local = render_with("Launch", &[]);
        assert!(local.contains("console.info('Newsletter signup:', email);"));
        assert!(!local.contains("useFirestore"));

        let stored = render_with("Launch", &[FirebaseService::Database]);
        assert!(stored.contains("await addSubscriber({ email });"));
        assert!(stored.contains("useFirestore('subscribers')"));
    }

    #[test]
    fn test_jsx_significant_name_is_quoted() {
        let page = render_with("<Rocket & Co>", &[]);
        assert!(page.contains("Build faster with {\"<Rocket & Co>\"}"));
    }

    #[test]
    fn test_nav_and_footer_link_to_sections() {
        let page = render_with("Launch", &[]);
        assert_eq!(page.matches("href=\"#features\"").count(), 2);
        assert_eq!(page.matches("href=\"#newsletter\"").count(), 2);
        assert!(page.contains("<section id=\"features\""));
        assert!(page.contains("</footer>"));
    }
}
