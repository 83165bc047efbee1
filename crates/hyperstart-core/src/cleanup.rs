//! Removes the base scaffold's demo stylesheets and the imports that point at them

use crate::answers::CssFramework;
use crate::error::Result;
use crate::patch;
use crate::project::{FileSink, Project};

/// Delete stylesheets the chosen CSS framework does not use and strip
/// dangling imports. Running it again changes nothing.
pub fn run<S: FileSink>(project: &mut Project<S>, css: CssFramework) -> Result<()> {
    let layout = project.layout();

    project.remove_if_exists(layout.default_stylesheet())?;

    if !css.needs_global_stylesheet() {
        project.remove_if_exists(layout.global_stylesheet())?;
        let entry = project.resolve(layout.entry_candidates());
        project.patch(entry, |text| {
            patch::remove_import(text, layout.global_stylesheet_specifier())
        })?;
    }

    let root = project.resolve(layout.root_component_candidates());
    project.patch(root, |text| {
        patch::remove_import(text, layout.default_stylesheet_specifier())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Framework;
    use crate::project::{FileChange, Layout, MemorySink};

    const MAIN: &str = "import { StrictMode } from 'react'\nimport './index.css'\nimport App from './App.jsx'\n";
    const APP: &str = "import { useState } from 'react'\nimport './App.css'\n\nfunction App() {}\n";

    fn vite_project() -> Project<MemorySink> {
        let mut sink = MemorySink::new();
        sink.seed("app/src/main.jsx", MAIN);
        sink.seed("app/src/App.jsx", APP);
        sink.seed("app/src/index.css", ":root {}\n");
        sink.seed("app/src/App.css", "#root {}\n");
        Project::new("app", Layout::for_framework(Framework::Vite), sink)
    }

    #[test]
    fn test_cleanup_without_tailwind() {
        let mut project = vite_project();
        run(&mut project, CssFramework::Mui).unwrap();

        assert!(!project.exists("src/App.css"));
        assert!(!project.exists("src/index.css"));
        assert!(!project.read("src/main.jsx").unwrap().contains("index.css"));
        assert!(!project.read("src/App.jsx").unwrap().contains("App.css"));
    }

    #[test]
    fn test_cleanup_keeps_tailwind_stylesheet() {
        let mut project = vite_project();
        run(&mut project, CssFramework::Tailwind).unwrap();

        assert!(project.exists("src/index.css"));
        assert!(project.read("src/main.jsx").unwrap().contains("import './index.css'"));
        assert!(!project.exists("src/App.css"));
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let mut project = vite_project();
        run(&mut project, CssFramework::BootstrapCdn).unwrap();
        let main = project.read("src/main.jsx").unwrap();
        let app = project.read("src/App.jsx").unwrap();
        let changes = project.changes().len();

        run(&mut project, CssFramework::BootstrapCdn).unwrap();
        assert_eq!(project.read("src/main.jsx").unwrap(), main);
        assert_eq!(project.read("src/App.jsx").unwrap(), app);
        assert_eq!(project.changes().len(), changes);
    }

    #[test]
    fn test_cleanup_on_next_layout() {
        let mut sink = MemorySink::new();
        sink.seed("app/src/app/layout.js", "import \"./globals.css\";\n\nexport default function RootLayout() {}\n");
        sink.seed("app/src/app/page.js", "import styles from \"./page.module.css\";\n\nexport default function Home() {}\n");
        sink.seed("app/src/app/globals.css", "body {}\n");
        sink.seed("app/src/app/page.module.css", ".page {}\n");
        let mut project = Project::new("app", Layout::for_framework(Framework::Next), sink);

        run(&mut project, CssFramework::ReactBootstrap).unwrap();

        assert!(!project.read("src/app/layout.js").unwrap().contains("globals.css"));
        assert!(!project.read("src/app/page.js").unwrap().contains("page.module.css"));
        assert!(project
            .changes()
            .contains(&FileChange::Removed("src/app/page.module.css".to_string())));
    }
}
