//! Admin dashboard: collapsible sidebar, stats grid and recent activity

use super::fill;
use super::sections;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::AnswerSet;

pub const COMPONENT: &str = "Dashboard";

pub fn render(ui: &Ui, answers: &AnswerSet) -> String {
    let mut imports = Imports::new();
    imports.named("react", &["useState"]);

    let account = sections::account(ui, &mut imports, answers);
    let upload = sections::upload(ui, &mut imports, answers, "reports", "Upload a report");
    let activity = sections::records(
        ui,
        &mut imports,
        answers,
        "activity",
        "activity",
        "{ orderBy: ['createdAt', 'desc'], limit: 5 }",
        "SAMPLE_ACTIVITY",
    );

    let toggle = ui::button(
        ui,
        &mut imports,
        "☰",
        "onClick={() => setSidebarOpen(!sidebarOpen)} aria-label=\"Toggle sidebar\"",
        Variant::Ghost,
    );
    let stat_card = ui::card(ui, &mut imports, "key={stat.title}", None, None, STAT_BODY);
    let activity_card = ui::card(
        ui,
        &mut imports,
        "",
        Some("Recent Activity"),
        Some("Latest updates from your dashboard"),
        ACTIVITY_BODY,
    );
    let upload_card = upload
        .as_ref()
        .map(|section| ui::card(ui, &mut imports, "", Some("Reports"), None, &section.jsx))
        .unwrap_or_default();

    let layout = ui::component(
        "DashboardLayout",
        "{ children }",
        &sections::join(&[
            "const [sidebarOpen, setSidebarOpen] = useState(true);",
            &sections::setup([&account]),
        ]),
        &fill(
            LAYOUT_JSX,
            &[
                ("NAME", &ui::jsx_text(answers.project_name())),
                ("TOGGLE", &toggle),
                ("ACCOUNT", &sections::jsx_or(&account, "<span>Dashboard User</span>")),
            ],
        ),
        false,
    );

    let home = ui::component(
        "DashboardHome",
        "",
        &sections::join(&[&activity, "", &sections::setup([&upload])]),
        &fill(
            HOME_JSX,
            &[
                ("STAT_CARD", &stat_card),
                ("ACTIVITY_CARD", &activity_card),
                ("UPLOAD_CARD", &upload_card),
            ],
        ),
        false,
    );

    let page = ui::component(
        COMPONENT,
        "",
        "",
        &sections::protect(
            ui,
            &mut imports,
            answers,
            "<DashboardLayout>\n  <DashboardHome />\n</DashboardLayout>",
        ),
        true,
    );

    ui::module(ui, &imports, &[SAMPLE_DATA.to_string(), layout, home, page])
}

const SAMPLE_DATA: &str = r#"const SIDEBAR_ITEMS = [
  { name: 'Dashboard', href: '/', icon: '📊' },
  { name: 'Analytics', href: '/analytics', icon: '📈' },
  { name: 'Users', href: '/users', icon: '👥' },
  { name: 'Settings', href: '/settings', icon: '⚙️' },
];

const STATS = [
  { title: 'Total Users', value: '2,345', change: '+12%', icon: '👥' },
  { title: 'Revenue', value: '$45,234', change: '+8%', icon: '💰' },
  { title: 'Orders', value: '1,234', change: '+23%', icon: '📦' },
  { title: 'Conversion', value: '3.45%', change: '+2%', icon: '📈' },
];

const SAMPLE_ACTIVITY = [
  { id: 'a1', message: 'New user registered', time: '2 min ago', color: '#10b981' },
  { id: 'a2', message: 'Order #1234 completed', time: '5 min ago', color: '#3b82f6' },
  { id: 'a3', message: 'Payment processed', time: '10 min ago', color: '#f59e0b' },
];"#;

const LAYOUT_JSX: &str = r#"<div style={{ display: 'flex', minHeight: '100vh' }}>
  <aside style={{ width: sidebarOpen ? '250px' : '0', background: '#1f2937', color: 'white', transition: 'width 0.3s', overflow: 'hidden' }}>
    <div style={{ padding: '1rem' }}>
      <h2 style={{ fontSize: '1.25rem', fontWeight: 'bold', marginBottom: '2rem' }}>{{NAME}}</h2>
      <nav>
        {SIDEBAR_ITEMS.map((item) => (
          <a
            key={item.name}
            href={item.href}
            style={{ display: 'flex', alignItems: 'center', padding: '0.75rem', marginBottom: '0.5rem', borderRadius: '0.5rem', textDecoration: 'none', color: 'inherit' }}
          >
            <span style={{ marginRight: '0.75rem' }}>{item.icon}</span>
            {item.name}
          </a>
        ))}
      </nav>
    </div>
  </aside>

  <div style={{ flex: 1, display: 'flex', flexDirection: 'column' }}>
    <header style={{ background: 'white', borderBottom: '1px solid #e5e7eb', padding: '1rem', display: 'flex', justifyContent: 'space-between', alignItems: 'center' }}>
      {{TOGGLE}}
      {{ACCOUNT}}
    </header>
    <main style={{ flex: 1, padding: '2rem', background: '#f9fafb' }}>
      {children}
    </main>
  </div>
</div>"#;

const HOME_JSX: &str = r#"<div>
  <h1 style={{ fontSize: '2rem', fontWeight: 'bold', marginBottom: '2rem' }}>Dashboard Overview</h1>

  <div style={{ display: 'grid', gridTemplateColumns: 'repeat(auto-fit, minmax(250px, 1fr))', gap: '1.5rem', marginBottom: '2rem' }}>
    {STATS.map((stat) => (
      {{STAT_CARD}}
    ))}
  </div>

  <div style={{ display: 'grid', gap: '1.5rem' }}>
    {{ACTIVITY_CARD}}
    {{UPLOAD_CARD}}
  </div>
</div>"#;

const STAT_BODY: &str = r#"<div style={{ fontSize: '0.875rem', color: '#6b7280', marginBottom: '0.5rem' }}>
  {stat.icon} {stat.title}
</div>
<div style={{ fontSize: '2rem', fontWeight: 'bold' }}>{stat.value}</div>
<p style={{ color: '#10b981', fontSize: '0.875rem' }}>{stat.change} from last month</p>"#;

const ACTIVITY_BODY: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '1rem' }}>
  {activity.map((item) => (
    <div key={item.id} style={{ display: 'flex', alignItems: 'center', gap: '1rem' }}>
      <div style={{ width: '10px', height: '10px', borderRadius: '50%', background: item.color || '#10b981' }} />
      <span>{item.message}</span>
      <span style={{ color: '#6b7280', marginLeft: 'auto' }}>{item.time}</span>
    </div>
  ))}
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, CssFramework, FirebaseService, Framework, Template};

    fn render_with(css: CssFramework, services: &[FirebaseService]) -> String {
        let mut answers = Answers::new("Acme Admin", Framework::Vite, Template::Dashboard, css);
        answers.firebase_services.extend(services.iter().copied());
        let answers = answers.finalize().unwrap();
        render(&Ui::new(&answers), &answers)
    }

    #[test]
    fn test_no_auth_means_no_logout() {
        let page = render_with(CssFramework::Tailwind, &[]);
        assert!(!page.to_lowercase().contains("logout"));
        assert!(!page.contains("ProtectedRoute"));
        assert!(page.contains("Dashboard User"));
        assert!(page.contains("const activity = SAMPLE_ACTIVITY;"));
    }

    #[test]
    fn test_auth_protects_page() {
        let page = render_with(CssFramework::Mui, &[FirebaseService::Auth]);
        assert!(page.contains("import { ProtectedRoute } from '../components/auth/ProtectedRoute';"));
        assert!(page.contains("const { user, logout } = useAuth();"));
        assert!(page.contains("<ProtectedRoute>"));
    }

    #[test]
    fn test_library_rendering_uses_components() {
        let page = render_with(CssFramework::TailwindShadcn, &[FirebaseService::Database]);
        assert!(page.contains("import { Card, CardContent, CardDescription, CardHeader, CardTitle } from '@/components/ui/card';"));
        assert!(page.contains("<Card key={stat.title}>"));
        assert!(page.contains("useCollection('activity'"));
        assert!(!page.contains("<button"));
        assert!(page.contains("Acme Admin"));
    }
}
