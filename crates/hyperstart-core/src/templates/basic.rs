//! Basic template: a welcome screen in place of the scaffold's demo app.
//!
//! Runs after cleanup and rewrites both the root component and the entry
//! point from scratch, so whatever earlier steps left in them is replaced.

use super::fill;
use super::ui::{self, Imports, Ui, Variant};
use crate::answers::{AnswerSet, CssFramework, FirebaseService};
use crate::css::{BOOTSTRAP_CDN_LINK, BOOTSTRAP_CSS};
use crate::error::Result;
use crate::project::{FileSink, Project};

/// Rewrite the root component and the entry point
pub fn regenerate<S: FileSink>(project: &mut Project<S>, answers: &AnswerSet) -> Result<()> {
    let layout = project.layout();

    let root = project.resolve(layout.root_component_candidates());
    project.write(root, &root_component(answers))?;

    let entry = project.resolve(layout.entry_candidates());
    project.write(entry, &entry_point(answers))?;
    Ok(())
}

/// Welcome screen naming the project once, in its heading
pub fn root_component(answers: &AnswerSet) -> String {
    let layout = answers.layout();
    let ui = Ui::new(answers);
    let to_src = layout.root_to_src();
    let mut imports = Imports::new();

    let heading = fill(
        HEADING,
        &[("NAME", &ui::jsx_text(answers.project_name()))],
    );
    let subtitle = if answers.is_pwa() {
        "Your PWA is ready. Start building amazing things!"
    } else {
        "Your project is ready. Start building amazing things!"
    };

    let mut badges: Vec<String> = [
        (FirebaseService::Auth, "🔥 Firebase Auth Ready"),
        (FirebaseService::Database, "🗄️ Firestore Connected"),
        (FirebaseService::Storage, "📁 Storage Configured"),
    ]
    .iter()
    .filter(|(service, _)| answers.has_firebase(*service))
    .map(|(_, text)| ui::badge(&ui, &mut imports, text, ""))
    .collect();
    if ui.library() {
        badges.push(ui::badge(&ui, &mut imports, "🎨 shadcn/ui Components", ""));
    }

    let mut setup = String::new();
    let pwa = if answers.is_pwa() {
        imports.named(&format!("{}hooks/usePWA", to_src), &["usePWA"]);
        setup.push_str("const { isInstallable, installApp, isOnline } = usePWA();");
        let enabled = ui::badge(&ui, &mut imports, "📱 PWA Enabled", "");
        let online = ui::badge(&ui, &mut imports, "{isOnline ? '🟢 Online' : '🔴 Offline'}", "");
        let install = ui::button(&ui, &mut imports, "📲 Install App", "onClick={installApp}", Variant::Primary);
        fill(PWA_STATUS, &[("ENABLED", &enabled), ("ONLINE", &online), ("INSTALL", &install)])
    } else {
        String::new()
    };

    let status = if badges.is_empty() {
        String::new()
    } else {
        format!(
            "<div style={{{{ display: 'flex', flexWrap: 'wrap', gap: '0.5rem', justifyContent: 'center' }}}}>\n{}\n</div>",
            ui::indent(&badges.join("\n"), 2)
        )
    };

    let welcome = if ui.library() {
        let body = [status.as_str(), pwa.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
        ui::card(
            &ui,
            &mut imports,
            "className=\"w-full max-w-lg\"",
            Some(&heading),
            Some(subtitle),
            if body.is_empty() { "<p>Edit this page to get started.</p>" } else { body.as_str() },
        )
    } else {
        fill(
            PLAIN_WELCOME,
            &[
                ("HEADING", &heading),
                ("SUBTITLE", subtitle),
                ("STATUS", &status),
                ("PWA", &pwa),
            ],
        )
    };

    let content = fill(SCREEN, &[("WELCOME", &welcome)]);
    let jsx = if answers.has_firebase(FirebaseService::Auth) {
        imports.named(&format!("{}hooks/useAuth", to_src), &["AuthProvider"]);
        format!("<AuthProvider>\n{}\n</AuthProvider>", ui::indent(&content, 2))
    } else {
        content
    };

    let name = if layout.is_next() { "Home" } else { "App" };
    // Library imports resolve through the `@` alias
    ui::module(&ui, &imports, &[ui::component(name, "", &setup, &jsx, true)])
}

/// Entry point: the router setup on Vite, the root layout on Next
pub fn entry_point(answers: &AnswerSet) -> String {
    let css = answers.css_framework();
    if answers.layout().is_next() {
        let stylesheet = match css {
            CssFramework::Tailwind | CssFramework::TailwindShadcn => "import './globals.css';\n\n".to_string(),
            CssFramework::ReactBootstrap => format!("import '{}';\n\n", BOOTSTRAP_CSS),
            CssFramework::BootstrapCdn | CssFramework::Mui => String::new(),
        };
        let head = if css == CssFramework::BootstrapCdn {
            format!("\n      <head>{}</head>", BOOTSTRAP_CDN_LINK)
        } else {
            String::new()
        };
        let manifest = if answers.is_pwa() {
            "\n  manifest: '/manifest.json',"
        } else {
            ""
        };
        format!(
            "{}export const metadata = {{\n  title: {},\n  description: 'Generated by Hyperstart',{}\n}};\n\n{}",
            stylesheet,
            ui::js_string(answers.project_name()),
            manifest,
            fill(NEXT_LAYOUT, &[("HEAD", &head)])
        )
    } else {
        let stylesheet = match css {
            CssFramework::Tailwind | CssFramework::TailwindShadcn => "import './index.css';\n".to_string(),
            CssFramework::ReactBootstrap => format!("import '{}';\n", BOOTSTRAP_CSS),
            CssFramework::BootstrapCdn | CssFramework::Mui => String::new(),
        };
        format!("{}{}", stylesheet, VITE_MAIN)
    }
}

const HEADING: &str = r#"Welcome to{" "}
<span style={{ color: '#2563eb' }}>{{NAME}}</span> 🚀"#;

const SCREEN: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', justifyContent: 'center', alignItems: 'center', minHeight: '100vh', fontFamily: 'sans-serif', background: '#f9fafb', color: '#111', textAlign: 'center', padding: '2rem' }}>
  {{WELCOME}}
</div>"#;

const PLAIN_WELCOME: &str = r#"<h1 style={{ fontSize: '2.5rem', marginBottom: '0.5rem', fontWeight: 600 }}>
  {{HEADING}}
</h1>
<p style={{ fontSize: '1.1rem', color: '#555', marginBottom: '2rem' }}>
  {{SUBTITLE}}
</p>
{{STATUS}}
{{PWA}}"#;

const PWA_STATUS: &str = r#"<div style={{ display: 'flex', flexDirection: 'column', gap: '1rem', alignItems: 'center', marginTop: '1.5rem' }}>
  {{ENABLED}}
  {{ONLINE}}
  {isInstallable && (
    {{INSTALL}}
  )}
</div>"#;

const VITE_MAIN: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import { BrowserRouter, Routes, Route } from 'react-router-dom';
import App from './App';

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <BrowserRouter>
      <Routes>
        <Route path="/" element={<App />} />
      </Routes>
    </BrowserRouter>
  </React.StrictMode>
);
"#;

const NEXT_LAYOUT: &str = r#"export default function RootLayout({ children }) {
  return (
    <html lang="en">{{HEAD}}
      <body>{children}</body>
    </html>
  );
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, Framework, Template};
    use crate::project::{Layout, MemorySink};

    fn answers(name: &str, framework: Framework, css: CssFramework) -> Answers {
        Answers::new(name, framework, Template::Basic, css)
    }

    #[test]
    fn test_project_name_appears_once() {
        for name in ["my app", "café ☕", "rocket"] {
            for css in [CssFramework::BootstrapCdn, CssFramework::TailwindShadcn] {
                let set = answers(name, Framework::Vite, css).finalize().unwrap();
                let root = root_component(&set);
                assert_eq!(root.matches(name).count(), 1, "{} with {:?}", name, css);
            }
        }
    }

    #[test]
    fn test_special_name_is_a_string_expression() {
        let set = answers("a{b}", Framework::Vite, CssFramework::Mui).finalize().unwrap();
        let root = root_component(&set);
        assert!(root.contains("<span style={{ color: '#2563eb' }}>{\"a{b}\"}</span>"));
    }

    #[test]
    fn test_token_shaped_name_is_kept_verbatim() {
        for name in ["{{PWA}}", "{{STATUS}}", "{{WELCOME}}"] {
            let set = answers(name, Framework::Vite, CssFramework::BootstrapCdn).finalize().unwrap();
            let root = root_component(&set);
            assert_eq!(root.matches(name).count(), 1, "{}", name);
            assert!(root.contains(&format!("{{\"{}\"}}", name)));
        }
    }

    #[test]
    fn test_pwa_and_firebase_status() {
        let mut raw = answers("app", Framework::Vite, CssFramework::Tailwind);
        raw.is_pwa = true;
        raw.firebase_services.insert(FirebaseService::Auth);
        raw.firebase_services.insert(FirebaseService::Storage);
        let root = root_component(&raw.finalize().unwrap());

        assert!(root.contains("import { usePWA } from './hooks/usePWA';"));
        assert!(root.contains("import { AuthProvider } from './hooks/useAuth';"));
        assert!(root.contains("const { isInstallable, installApp, isOnline } = usePWA();"));
        assert!(root.contains("🔥 Firebase Auth Ready"));
        assert!(root.contains("📁 Storage Configured"));
        assert!(!root.contains("Firestore Connected"));
        assert!(root.contains("Your PWA is ready."));
    }

    #[test]
    fn test_plain_root_has_no_imports() {
        let set = answers("app", Framework::Vite, CssFramework::BootstrapCdn).finalize().unwrap();
        let root = root_component(&set);
        assert!(root.starts_with("export default function App() {"));
        assert!(!root.contains("AuthProvider"));
    }

    #[test]
    fn test_vite_entry_point_css_import() {
        let tailwind = entry_point(&answers("app", Framework::Vite, CssFramework::Tailwind).finalize().unwrap());
        assert!(tailwind.starts_with("import './index.css';\nimport React from 'react';"));
        assert!(tailwind.contains("<Route path=\"/\" element={<App />} />"));

        let cdn = entry_point(&answers("app", Framework::Vite, CssFramework::BootstrapCdn).finalize().unwrap());
        assert!(cdn.starts_with("import React from 'react';"));

        let bootstrap = entry_point(&answers("app", Framework::Vite, CssFramework::ReactBootstrap).finalize().unwrap());
        assert!(bootstrap.starts_with("import 'bootstrap/dist/css/bootstrap.min.css';"));
    }

    #[test]
    fn test_next_layout_keeps_links() {
        let mut raw = answers("app", Framework::Next, CssFramework::BootstrapCdn);
        raw.is_pwa = true;
        let layout = entry_point(&raw.finalize().unwrap());
        assert!(!layout.contains("globals.css"));
        assert!(layout.contains("bootstrap@5.3.3"));
        assert!(layout.contains("manifest: '/manifest.json',"));
        assert!(layout.contains("title: \"app\","));
    }

    #[test]
    fn test_regenerate_overwrites_resolved_files() {
        let mut sink = MemorySink::new();
        sink.seed("app/src/main.tsx", "old");
        sink.seed("app/src/App.tsx", "old");
        let mut project = Project::new("app", Layout::for_framework(Framework::Vite), sink);
        let set = answers("app", Framework::Vite, CssFramework::Mui).finalize().unwrap();

        regenerate(&mut project, &set).unwrap();
        assert!(project.read("src/App.tsx").unwrap().contains("Welcome to"));
        assert!(project.read("src/main.tsx").unwrap().contains("BrowserRouter"));
        assert!(!project.exists("src/App.jsx"));
    }
}
