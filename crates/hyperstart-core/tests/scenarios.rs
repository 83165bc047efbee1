//! End-to-end runs against an in-memory copy of a freshly created Vite app

use hyperstart_core::answers::{
    AiProvider, AnswerSet, Answers, Choice, CssFramework, FirebaseService, Framework, Template,
};
use hyperstart_core::config::env::parse_keys;
use hyperstart_core::project::{Layout, MemorySink, Project};
use hyperstart_core::runtime::RecordingRunner;
use hyperstart_core::scaffold::{self, ScaffoldEvent};
use hyperstart_core::services::{self, AiOptions};
use hyperstart_core::templates::{self, ui::Ui};
use hyperstart_core::{cleanup, FileChange};
use std::collections::BTreeSet;
use std::path::Path;

const MAIN: &str = "import { StrictMode } from 'react'\nimport { createRoot } from 'react-dom/client'\nimport './index.css'\nimport App from './App.jsx'\n\ncreateRoot(document.getElementById('root')).render(\n  <StrictMode>\n    <App />\n  </StrictMode>,\n)\n";
const APP: &str = "import { useState } from 'react'\nimport reactLogo from './assets/react.svg'\nimport './App.css'\n\nfunction App() {\n  return <h1>Vite + React</h1>\n}\n\nexport default App\n";
const INDEX_HTML: &str = "<!doctype html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    <title>Vite + React</title>\n  </head>\n  <body>\n    <div id=\"root\"></div>\n    <script type=\"module\" src=\"/src/main.jsx\"></script>\n  </body>\n</html>\n";
const VITE_CONFIG: &str = "import { defineConfig } from 'vite'\nimport react from '@vitejs/plugin-react'\n\nexport default defineConfig({\n  plugins: [react()],\n})\n";

/// What `npm create vite` leaves behind, under `root`
fn vite_scaffold(root: &str) -> Project<MemorySink> {
    let mut sink = MemorySink::new();
    let files = [
        ("package.json", "{\n  \"name\": \"demo\"\n}\n"),
        ("index.html", INDEX_HTML),
        ("vite.config.js", VITE_CONFIG),
        ("src/main.jsx", MAIN),
        ("src/App.jsx", APP),
        ("src/index.css", ":root { font-family: system-ui; }\n"),
        ("src/App.css", "#root { max-width: 1280px; }\n"),
    ];
    for (path, contents) in files {
        sink.seed(Path::new(root).join(path), contents);
    }
    Project::new(root, Layout::for_framework(Framework::Vite), sink)
}

async fn configure(project: &mut Project<MemorySink>, answers: &AnswerSet) -> RecordingRunner {
    let mut runner = RecordingRunner::new();
    scaffold::configure(project, &mut runner, answers, &mut |_| {})
        .await
        .unwrap();
    runner
}

fn subsets<T: Choice + Ord>() -> Vec<BTreeSet<T>> {
    (1..1usize << T::ALL.len())
        .map(|mask| {
            T::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn test_scenario_basic_with_bootstrap_cdn() {
    let answers = Answers::new("my app", Framework::Vite, Template::Basic, CssFramework::BootstrapCdn)
        .finalize()
        .unwrap();
    let mut project = vite_scaffold("my app");
    let runner = configure(&mut project, &answers).await;

    let entry = project.read("src/main.jsx").unwrap();
    assert!(!entry.lines().any(|l| l.starts_with("import '") && l.contains(".css")));
    assert!(!entry.contains("./index.css"));

    let root = project.read("src/App.jsx").unwrap();
    assert!(root.contains("my app"));
    assert!(!root.contains("App.css"));

    assert!(!project.exists("src/lib"));
    assert!(!project.exists("src/components/auth"));
    assert!(!project.exists("src/index.css"));
    assert!(!project.exists("src/App.css"));
    assert!(project.read("index.html").unwrap().contains("bootstrap@5.3.3"));
    assert!(project.read("README.md").unwrap().starts_with("# ⚡ my app"));

    // Only the router install; the CDN needs no packages
    assert_eq!(runner.commands(), vec!["npm install react-router-dom".to_string()]);
}

#[tokio::test]
async fn test_scenario_ai_saas_with_component_library() {
    let mut raw = Answers::new("studio", Framework::Vite, Template::AiSaas, CssFramework::TailwindShadcn);
    raw.ai_providers.insert(AiProvider::OpenAi);
    raw.include_payments = true;
    let answers = raw.finalize().unwrap();
    let mut project = vite_scaffold("studio");
    configure(&mut project, &answers).await;

    let registry = project.read("src/lib/ai.js").unwrap();
    assert!(registry.contains("openai:"));
    assert!(!registry.contains("anthropic"));
    assert!(!registry.contains("gemini"));

    assert!(project.exists("src/lib/stripe.js"));

    let schema = project.read("supabase/schema.sql").unwrap();
    assert!(schema.contains("create table if not exists public.profiles"));
    assert!(schema.contains("create table if not exists public.generations"));

    let keys = parse_keys(&project.read(".env.example").unwrap());
    assert!(keys.contains("OPENAI_API_KEY"));
    assert!(keys.contains("VITE_STRIPE_PUBLISHABLE_KEY"));
    assert!(!keys.contains("ANTHROPIC_API_KEY"));

    let page = project.read("src/pages/AiStudio.jsx").unwrap();
    assert!(page.contains("@/components/ui/button"));
    assert!(project.exists("src/components/ui/button.jsx"));
}

#[tokio::test]
async fn test_scenario_dashboard_without_services() {
    let answers = Answers::new("board", Framework::Vite, Template::Dashboard, CssFramework::Tailwind)
        .finalize()
        .unwrap();
    let mut project = vite_scaffold("board");
    configure(&mut project, &answers).await;

    let page = project.read("src/pages/Dashboard.jsx").unwrap();
    assert!(!page.to_lowercase().contains("logout"));
    assert!(!page.contains("useAuth"));

    let root = project.read("src/App.jsx").unwrap();
    assert!(root.contains("import Dashboard from './pages/Dashboard';"));
    assert!(!project.exists(".env.example"));
}

#[tokio::test]
async fn test_env_keys_are_union_of_selected_services() {
    let layout = Layout::for_framework(Framework::Vite);
    for selection in subsets::<FirebaseService>() {
        let mut project = vite_scaffold("app");
        let mut runner = RecordingRunner::new();
        let ui = Ui::with_library(false, layout);
        services::firebase::install(&mut project, &mut runner, &selection, &ui)
            .await
            .unwrap();

        let expected: BTreeSet<String> = services::firebase::env_keys(&selection)
            .into_iter()
            .map(|(key, _)| layout.env_key(key))
            .collect();
        let written = project
            .changes()
            .iter()
            .filter(|c| c.path().ends_with(".env.example"))
            .count();

        assert_eq!(written, 1, "{:?}", selection);
        assert_eq!(parse_keys(&project.read(".env.example").unwrap()), expected, "{:?}", selection);
    }
}

#[tokio::test]
async fn test_empty_selections_change_nothing() {
    let mut project = vite_scaffold("app");
    let mut runner = RecordingRunner::new();
    let ui = Ui::with_library(false, project.layout());

    services::firebase::install(&mut project, &mut runner, &BTreeSet::new(), &ui)
        .await
        .unwrap();
    services::ai::install(&mut project, &mut runner, &BTreeSet::new(), &AiOptions::default())
        .await
        .unwrap();
    services::payments::install(&mut project, &mut runner, false).await.unwrap();
    services::pwa::install(&mut project, &mut runner, "app", false).await.unwrap();
    services::packages::write_modules(&mut project, &BTreeSet::new()).unwrap();

    assert!(project.changes().is_empty());
    assert!(runner.invocations().is_empty());
}

#[test]
fn test_basic_heading_names_project_once() {
    for name in ["hello world", "żółć 🚀", "O'Brien & co", "{{PWA}}"] {
        let answers = Answers::new(name, Framework::Vite, Template::Basic, CssFramework::Tailwind)
            .finalize()
            .unwrap();
        let root = templates::basic::root_component(&answers);
        assert_eq!(root.matches(name).count(), 1, "{}", name);
    }
}

#[test]
fn test_library_and_plain_renderings_never_mix() {
    for template in Template::ALL.iter().copied().filter(|t| *t != Template::Basic) {
        for css in [CssFramework::TailwindShadcn, CssFramework::Tailwind] {
            let mut raw = Answers::new("app", Framework::Vite, template, css);
            raw.firebase_services = FirebaseService::ALL.iter().copied().collect();
            raw.ai_providers.insert(AiProvider::Anthropic);
            raw.include_payments = true;
            let answers = raw.finalize().unwrap();
            let page = templates::render_page(&answers).unwrap().source;

            let library = page.contains("@/components/ui/");
            let plain = ["<button", "<input", "<textarea"]
                .iter()
                .any(|tag| page.contains(tag));
            assert_eq!(library, css == CssFramework::TailwindShadcn, "{:?}", template);
            assert!(!(library && plain), "{:?} mixes renderings", template);
        }
    }
}

#[tokio::test]
async fn test_cleanup_twice_matches_once() {
    let mut once = vite_scaffold("app");
    cleanup::run(&mut once, CssFramework::Mui).unwrap();

    let mut twice = vite_scaffold("app");
    cleanup::run(&mut twice, CssFramework::Mui).unwrap();
    cleanup::run(&mut twice, CssFramework::Mui).unwrap();

    for file in ["src/main.jsx", "src/App.jsx"] {
        assert_eq!(once.read(file).unwrap(), twice.read(file).unwrap());
    }
    assert_eq!(once.changes(), twice.changes());
}

#[tokio::test]
async fn test_run_reports_delegated_components() {
    let mut raw = Answers::new("kit", Framework::Vite, Template::Landing, CssFramework::TailwindShadcn);
    raw.component_library_components.insert("dialog".to_string());
    let answers = raw.finalize().unwrap();
    let mut sink = MemorySink::new();
    let mut runner = RecordingRunner::new();
    let mut events = Vec::new();

    let report = scaffold::run(&answers, Path::new("work"), &mut sink, &mut runner, |e| events.push(e))
        .await
        .unwrap();

    assert!(events.contains(&ScaffoldEvent::ComponentsDelegated(vec!["dialog".to_string()])));
    assert!(report
        .commands
        .iter()
        .any(|c| c == "npx shadcn@latest add dialog --yes"));
    assert!(report
        .changes
        .contains(&FileChange::Wrote("src/pages/LandingPage.jsx".to_string())));
    assert!(sink.file("work/kit/src/components/ui/card.jsx").is_some());
}
