//! Project README, rendered from the answer set alone
//!
//! Each section is a function returning `None` when the feature it documents
//! was not selected, so the README never mentions something the project lacks.

use crate::answers::{AnswerSet, Choice, CssFramework, ExtraPackage, FirebaseService, Template};
use crate::error::Result;
use crate::project::{FileSink, Project};
use crate::services::firebase;

pub fn render(answers: &AnswerSet) -> String {
    let sections = [
        Some(header(answers)),
        template_features(answers),
        Some(stack(answers)),
        firebase_features(answers),
        components(answers),
        pwa(answers),
        ai(answers),
        payments(answers),
        extra_packages(answers),
        Some(getting_started(answers)),
        env_setup(answers),
        Some(structure(answers)),
        Some(styling(answers)),
        api_client(answers),
        Some(scripts(answers)),
        Some(deployment(answers)),
    ];
    let mut out = sections.into_iter().flatten().collect::<Vec<_>>().join("\n\n");
    out.push('\n');
    out
}

pub fn write<S: FileSink>(project: &mut Project<S>, answers: &AnswerSet) -> Result<()> {
    project.write("README.md", &render(answers))
}

fn header(answers: &AnswerSet) -> String {
    let pwa = if answers.is_pwa() {
        " with Progressive Web App capabilities"
    } else {
        ""
    };
    format!(
        "# ⚡ {}\n\nA modern React application built with Hyperstart on {}{}.",
        answers.project_name(),
        answers.framework().label(),
        pwa
    )
}

fn template_features(answers: &AnswerSet) -> Option<String> {
    let template = answers.template();
    if template == Template::Basic {
        return None;
    }
    let page = answers.layout().page_file(page_component(template));
    Some(format!(
        "## 🎯 Template: {}\n\n{}.\n\nThe page lives in `{}` and is mounted from the root component.",
        template.label(),
        capitalize(template.hint()),
        page
    ))
}

fn page_component(template: Template) -> &'static str {
    use crate::templates::{
        ai_saas, blog, dashboard, ecommerce, landing, learning, project_mgmt, social,
    };
    match template {
        Template::Basic => "App",
        Template::Dashboard => dashboard::COMPONENT,
        Template::Blog => blog::COMPONENT,
        Template::Ecommerce => ecommerce::COMPONENT,
        Template::Landing => landing::COMPONENT,
        Template::AiSaas => ai_saas::COMPONENT,
        Template::Social => social::COMPONENT,
        Template::ProjectMgmt => project_mgmt::COMPONENT,
        Template::Learning => learning::COMPONENT,
    }
}

fn stack(answers: &AnswerSet) -> String {
    let mut lines = vec![
        format!("- ⚛️ **{}** - application framework", answers.framework().label()),
        format!("- 🎨 **{}** - {}", answers.css_framework().label(), answers.css_framework().hint()),
    ];
    if !answers.layout().is_next() {
        lines.push("- 🛣️ **React Router** - client-side routing".to_string());
    }
    format!("## 🚀 Features\n\n{}", lines.join("\n"))
}

fn firebase_features(answers: &AnswerSet) -> Option<String> {
    if answers.firebase_services().is_empty() {
        return None;
    }
    let lines: Vec<String> = answers
        .firebase_services()
        .iter()
        .map(|s| format!("- **{}** - {}", s.label(), s.hint()))
        .collect();
    Some(format!("### 🔥 Firebase\n\n{}", lines.join("\n")))
}

fn components(answers: &AnswerSet) -> Option<String> {
    if !answers.uses_component_library() {
        return None;
    }
    let mut names: Vec<String> = crate::css::components::CORE
        .iter()
        .map(|c| c.to_string())
        .collect();
    for extra in answers.component_library_components() {
        if !names.contains(extra) {
            names.push(extra.clone());
        }
    }
    let lines: Vec<String> = names
        .iter()
        .map(|c| format!("- `{}` in `src/components/ui/{}.jsx`", c, c))
        .collect();
    Some(format!(
        "### 🧩 UI components\n\n{}\n\nAdd more with `npx shadcn@latest add <name>`.",
        lines.join("\n")
    ))
}

fn pwa(answers: &AnswerSet) -> Option<String> {
    if !answers.is_pwa() {
        return None;
    }
    let registration = if answers.layout().is_next() {
        "`public/sw.js`, registered by `usePWA`"
    } else {
        "`vite-plugin-pwa` with auto-update"
    };
    Some(format!(
        "### 📱 PWA\n\n\
         - Installable, with an install button driven by `src/hooks/usePWA.js`\n\
         - Service worker: {}\n\
         - Online/offline status in the UI\n\n\
         ⚠️ Replace the placeholder icons in `public/` (`pwa-192x192.svg`, `pwa-512x512.svg`, \
         `apple-touch-icon.svg`) with real PNG icons before shipping.",
        registration
    ))
}

fn ai(answers: &AnswerSet) -> Option<String> {
    if answers.ai_providers().is_empty() {
        return None;
    }
    let mut out = String::from("### 🤖 AI\n\nProviders:\n\n");
    for provider in answers.ai_providers() {
        out.push_str(&format!(
            "- **{}** (`{}`, docs: {})\n",
            provider.label(),
            provider.default_model(),
            provider.docs_url()
        ));
    }
    if !answers.ai_features().is_empty() {
        out.push_str("\nFeatures:\n\n");
        for feature in answers.ai_features() {
            out.push_str(&format!("- {}\n", feature.label()));
        }
    }
    out.push_str(
        "\nRequests go through the Supabase edge function in `supabase/functions/generate`; \
         provider keys never reach the browser. Apply `supabase/schema.sql` to your project, then deploy with \
         `supabase functions deploy generate`.",
    );
    Some(out)
}

fn payments(answers: &AnswerSet) -> Option<String> {
    if !answers.include_payments() {
        return None;
    }
    Some(
        "### 💳 Payments\n\n\
         Stripe Checkout is wired through `src/hooks/useCheckout.js`. The serverless handler in \
         `api/create-checkout-session.js` creates sessions with `STRIPE_SECRET_KEY`; deploy it \
         alongside the app and point the checkout URL at it."
            .to_string(),
    )
}

fn extra_packages(answers: &AnswerSet) -> Option<String> {
    if answers.extra_packages().is_empty() {
        return None;
    }
    let lines: Vec<String> = answers
        .extra_packages()
        .iter()
        .map(|p| format!("- **{}** - {}", p.npm_name(), p.description()))
        .collect();
    Some(format!("### 📦 Additional packages\n\n{}", lines.join("\n")))
}

fn getting_started(answers: &AnswerSet) -> String {
    format!(
        "## 🛠️ Getting started\n\n\
         Requires Node.js 18 or newer.\n\n\
         ```bash\ncd {}\nnpm install\nnpm run dev\n```\n\n\
         The app runs at `{}`.",
        answers.project_name(),
        answers.layout().dev_url()
    )
}

/// Every `.env.example` key the selection produced
fn env_keys(answers: &AnswerSet) -> Vec<String> {
    let layout = answers.layout();
    let mut keys: Vec<String> = firebase::env_keys(answers.firebase_services())
        .into_iter()
        .map(|(key, _)| layout.env_key(key))
        .collect();
    if !answers.ai_providers().is_empty() {
        keys.push(layout.env_key("SUPABASE_URL"));
        keys.push(layout.env_key("SUPABASE_ANON_KEY"));
        keys.extend(answers.ai_providers().iter().map(|p| p.env_key().to_string()));
    }
    if answers.include_payments() {
        keys.push(layout.env_key("STRIPE_PUBLISHABLE_KEY"));
        keys.push(layout.env_key("STRIPE_PRICE_ID"));
        keys.push(layout.env_key("CHECKOUT_URL"));
        keys.push("STRIPE_SECRET_KEY".to_string());
    }
    if answers.has_package(ExtraPackage::Axios) {
        keys.push(layout.env_key("API_URL"));
    }
    keys
}

fn env_setup(answers: &AnswerSet) -> Option<String> {
    let keys = env_keys(answers);
    if keys.is_empty() {
        return None;
    }
    let mut out = format!(
        "## 🔑 Environment\n\n\
         ```bash\ncp .env.example .env.local\n```\n\n\
         Then fill in:\n\n```env\n{}\n```",
        keys.iter().map(|k| format!("{}=", k)).collect::<Vec<_>>().join("\n")
    );
    if !answers.firebase_services().is_empty() {
        out.push_str(
            "\n\nFirebase values come from Firebase Console > Project Settings > General > Your apps.",
        );
        let rules: Vec<&str> = [
            (FirebaseService::Database, "firestore:rules"),
            (FirebaseService::Storage, "storage"),
        ]
        .iter()
        .filter(|(service, _)| answers.has_firebase(*service))
        .map(|(_, target)| *target)
        .collect();
        if !rules.is_empty() {
            out.push_str(&format!(
                " Deploy the security rules with `firebase deploy --only {}`.",
                rules.join(",")
            ));
        }
    }
    Some(out)
}

fn structure(answers: &AnswerSet) -> String {
    let layout = answers.layout();
    let mut lines = vec![format!("{}/", answers.project_name())];
    let mut entry = |depth: usize, text: &str| {
        lines.push(format!("{}{}", "    ".repeat(depth), text));
    };

    if answers.is_pwa() {
        entry(1, "public/            # icons and manifest");
    }
    entry(1, "src/");
    entry(2, "components/      # reusable components");
    if answers.uses_component_library() {
        entry(3, "ui/            # UI primitives");
    }
    if answers.has_firebase(FirebaseService::Auth) {
        entry(3, "auth/          # login form and route guard");
    }
    entry(2, &format!("{}/ # template pages", last_segment(layout.pages_dir())));
    entry(2, "hooks/           # custom React hooks");
    if answers.uses_component_library()
        || !answers.firebase_services().is_empty()
        || !answers.ai_providers().is_empty()
        || answers.include_payments()
    {
        entry(2, "lib/             # service clients and utils");
    }
    entry(2, "store/           # state management");
    entry(2, "utils/           # helpers");
    entry(2, "assets/          # static assets");
    if !answers.ai_providers().is_empty() {
        entry(1, "supabase/          # schema and edge function");
    }
    if answers.include_payments() {
        entry(1, "api/               # checkout session handler");
    }
    if !answers.firebase_services().is_empty() {
        entry(1, "firebase.json      # Firebase deploy config");
    }
    if !env_keys(answers).is_empty() {
        entry(1, ".env.example       # environment template");
    }
    entry(1, "package.json");

    format!("## 📁 Project structure\n\n```\n{}\n```", lines.join("\n"))
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn styling(answers: &AnswerSet) -> String {
    let layout = answers.layout();
    let notes = match answers.css_framework() {
        CssFramework::Tailwind => format!(
            "- Utility classes are available everywhere\n- Global styles live in `{}`",
            layout.global_stylesheet()
        ),
        CssFramework::TailwindShadcn => format!(
            "- Utility classes plus accessible primitives in `src/components/ui/`\n\
             - Theme colors are CSS variables in `{}`\n\
             - `cn()` from `src/lib/utils.js` merges class names",
            layout.global_stylesheet()
        ),
        CssFramework::BootstrapCdn => {
            "- Bootstrap 5.3.3 is loaded from the CDN\n- Every Bootstrap class is available, nothing to install".to_string()
        }
        CssFramework::ReactBootstrap => {
            "- Import components: `import { Button, Container } from 'react-bootstrap'`\n- Bootstrap CSS is imported in the entry point".to_string()
        }
        CssFramework::Mui => {
            "- Import components: `import { Button, Container } from '@mui/material'`\n- Styling uses Emotion".to_string()
        }
    };
    format!("## 🎨 Styling\n\nThis project uses **{}**.\n\n{}", answers.css_framework().label(), notes)
}

fn api_client(answers: &AnswerSet) -> Option<String> {
    if !answers.has_package(ExtraPackage::Axios) {
        return None;
    }
    Some(format!(
        "## 🌐 API client\n\n\
         `src/utils/axiosInstance.js` exports a configured instance reading `{}`:\n\n\
         ```javascript\nimport {{ api }} from './utils/axiosInstance';\n\nconst users = await api.get('/users');\n```",
        answers.layout().env_key("API_URL")
    ))
}

fn scripts(answers: &AnswerSet) -> String {
    let preview = if answers.layout().is_next() {
        "- `npm run start` - serve the production build"
    } else {
        "- `npm run preview` - preview the production build"
    };
    format!(
        "## 🔧 Scripts\n\n\
         - `npm run dev` - start the development server\n\
         - `npm run build` - build for production\n\
         {}\n\
         - `npm run lint` - run ESLint",
        preview
    )
}

fn deployment(answers: &AnswerSet) -> String {
    let firebase = if answers.firebase_services().is_empty() {
        ""
    } else {
        " (recommended)"
    };
    format!(
        "## 🚀 Deployment\n\n\
         ### Vercel\n\n```bash\nnpx vercel --prod\n```\n\n\
         ### Netlify\n\nRun `npm run build` and upload `{}/`.\n\n\
         ### Firebase Hosting{}\n\n```bash\nnpm run build\nfirebase deploy --only hosting\n```",
        answers.layout().build_output_dir(),
        firebase
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AiProvider, Answers, Framework};

    fn basic() -> Answers {
        Answers::new("acme", Framework::Vite, Template::Basic, CssFramework::BootstrapCdn)
    }

    #[test]
    fn test_minimal_readme_omits_optional_sections() {
        let readme = render(&basic().finalize().unwrap());
        assert!(readme.starts_with("# ⚡ acme\n"));
        assert!(!readme.contains("Firebase\n"));
        assert!(!readme.contains("## 🔑 Environment"));
        assert!(!readme.contains("### 📱 PWA"));
        assert!(!readme.contains("Template:"));
        assert!(readme.contains("Bootstrap 5.3.3"));
        assert!(readme.contains("http://localhost:5173"));
    }

    #[test]
    fn test_sections_follow_selection() {
        let mut answers = Answers::new("studio", Framework::Next, Template::AiSaas, CssFramework::TailwindShadcn);
        answers.ai_providers.insert(AiProvider::OpenAi);
        answers.include_payments = true;
        answers.firebase_services.insert(FirebaseService::Storage);
        answers.extra_packages.insert(ExtraPackage::Axios);
        let readme = render(&answers.finalize().unwrap());

        assert!(readme.contains("## 🎯 Template: AI SaaS"));
        assert!(readme.contains("`src/views/AiStudio.jsx`"));
        assert!(readme.contains("**OpenAI**"));
        assert!(readme.contains("OPENAI_API_KEY="));
        assert!(readme.contains("NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET="));
        assert!(!readme.contains("NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN"));
        assert!(readme.contains("STRIPE_SECRET_KEY="));
        assert!(readme.contains("NEXT_PUBLIC_API_URL"));
        assert!(readme.contains("### 💳 Payments"));
        assert!(readme.contains("`button` in `src/components/ui/button.jsx`"));
        assert!(!readme.contains("React Router"));
    }

    #[test]
    fn test_rules_deploy_lists_only_written_rules() {
        let mut auth_only = basic();
        auth_only.firebase_services.insert(FirebaseService::Auth);
        let readme = render(&auth_only.finalize().unwrap());
        assert!(readme.contains("Firebase Console"));
        assert!(!readme.contains("firestore:rules"));
        assert!(!readme.contains("--only storage"));

        let mut storage = basic();
        storage.firebase_services.insert(FirebaseService::Auth);
        storage.firebase_services.insert(FirebaseService::Storage);
        let readme = render(&storage.finalize().unwrap());
        assert!(readme.contains("`firebase deploy --only storage`"));

        let mut both = basic();
        both.firebase_services.insert(FirebaseService::Database);
        both.firebase_services.insert(FirebaseService::Storage);
        let readme = render(&both.finalize().unwrap());
        assert!(readme.contains("`firebase deploy --only firestore:rules,storage`"));
    }

    #[test]
    fn test_structure_lists_lib_for_component_library() {
        let library = Answers::new("kit", Framework::Vite, Template::Basic, CssFramework::TailwindShadcn);
        assert!(render(&library.finalize().unwrap()).contains("lib/             #"));
        assert!(!render(&basic().finalize().unwrap()).contains("lib/             #"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let answers = basic().finalize().unwrap();
        assert_eq!(render(&answers), render(&answers));
    }
}
