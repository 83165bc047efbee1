//! CSS framework installation and entry-point wiring

pub mod components;

pub use components::ComponentInstall;

use crate::answers::{AnswerSet, CssFramework};
use crate::config::to_json;
use crate::error::Result;
use crate::patch;
use crate::project::{FileSink, Layout, Project};
use crate::runtime::{CommandRunner, Invocation};
use serde_json::json;

pub const BOOTSTRAP_CDN_LINK: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" crossOrigin="anonymous" />"#;

pub const BOOTSTRAP_CSS: &str = "bootstrap/dist/css/bootstrap.min.css";

/// npm packages a CSS framework needs on a given framework
pub fn packages(css: CssFramework, layout: Layout) -> Vec<&'static str> {
    let tailwind: &[&str] = if layout.is_next() {
        &["tailwindcss", "@tailwindcss/postcss", "postcss"]
    } else {
        &["tailwindcss", "@tailwindcss/vite"]
    };
    match css {
        CssFramework::Tailwind => tailwind.to_vec(),
        CssFramework::TailwindShadcn => {
            let mut all = tailwind.to_vec();
            all.extend([
                "class-variance-authority",
                "clsx",
                "tailwind-merge",
                "lucide-react",
                "@radix-ui/react-slot",
            ]);
            all
        }
        CssFramework::BootstrapCdn => Vec::new(),
        CssFramework::ReactBootstrap => vec!["react-bootstrap", "bootstrap"],
        CssFramework::Mui => vec!["@mui/material", "@emotion/react", "@emotion/styled"],
    }
}

/// Install the chosen CSS framework and wire it into the entry point
pub async fn install<S: FileSink, R: CommandRunner>(
    project: &mut Project<S>,
    runner: &mut R,
    answers: &AnswerSet,
) -> Result<Option<ComponentInstall>> {
    let layout = project.layout();
    let css = answers.css_framework();

    let pkgs = packages(css, layout);
    if !pkgs.is_empty() {
        runner
            .run(&Invocation::npm_install(pkgs, false).in_dir(project.root()))
            .await?;
    }

    let entry = project.resolve(layout.entry_candidates());
    let stylesheet_imports = [
        layout.global_stylesheet_specifier(),
        layout.default_stylesheet_specifier(),
    ];

    match css {
        CssFramework::Tailwind | CssFramework::TailwindShadcn => {
            let specifier = layout.global_stylesheet_specifier();
            let statement = format!("import '{}';", specifier);
            project.patch(entry, |text| {
                patch::replace_import(text, &stylesheet_imports, Some((specifier, statement.as_str())))
            })?;
            setup_tailwind(project)?;
        }
        CssFramework::ReactBootstrap => {
            let statement = format!("import '{}';", BOOTSTRAP_CSS);
            project.patch(entry, |text| {
                patch::replace_import(text, &stylesheet_imports, Some((BOOTSTRAP_CSS, statement.as_str())))
            })?;
        }
        CssFramework::Mui => {
            project.patch(entry, |text| {
                patch::replace_import(text, &stylesheet_imports, None)
            })?;
        }
        CssFramework::BootstrapCdn => add_cdn_link(project, entry)?,
    }

    if css.has_component_library() {
        setup_component_library(project)?;
        let installed =
            components::install(project, runner, answers.component_library_components()).await?;
        return Ok(Some(installed));
    }
    Ok(None)
}

fn setup_tailwind<S: FileSink>(project: &mut Project<S>) -> Result<()> {
    let layout = project.layout();
    project.write(layout.global_stylesheet(), "@import \"tailwindcss\";\n")?;

    if layout.is_next() {
        project.write(
            "postcss.config.mjs",
            "const config = {\n  plugins: {\n    '@tailwindcss/postcss': {},\n  },\n};\n\nexport default config;\n",
        )?;
    } else {
        let config = project.resolve(layout.bundler_config_candidates());
        project.patch(config, |text| {
            patch::register_vite_plugin(
                text,
                "@tailwindcss/vite",
                "import tailwindcss from '@tailwindcss/vite'",
                "tailwindcss()",
            )
        })?;
    }
    Ok(())
}

fn add_cdn_link<S: FileSink>(project: &mut Project<S>, entry: &str) -> Result<()> {
    if project.layout().is_next() {
        project.patch(entry, |text| {
            patch::insert_after_html_open(text, BOOTSTRAP_CDN_LINK)
        })?;
    } else {
        let link = BOOTSTRAP_CDN_LINK.replace("crossOrigin", "crossorigin");
        project.patch("index.html", |text| patch::insert_into_head(text, &link))?;
    }
    Ok(())
}

fn setup_component_library<S: FileSink>(project: &mut Project<S>) -> Result<()> {
    let layout = project.layout();

    project.write(layout.global_stylesheet(), THEME_CSS)?;
    project.write("src/lib/utils.js", UTILS_JS)?;

    let components = json!({
        "$schema": "https://ui.shadcn.com/schema.json",
        "style": "new-york",
        "rsc": layout.is_next(),
        "tsx": false,
        "tailwind": {
            "config": "",
            "css": layout.global_stylesheet(),
            "baseColor": "neutral",
            "cssVariables": true,
            "prefix": ""
        },
        "aliases": {
            "components": "@/components",
            "utils": "@/lib/utils",
            "ui": "@/components/ui",
            "lib": "@/lib",
            "hooks": "@/hooks"
        },
        "iconLibrary": "lucide"
    });
    project.write("components.json", &to_json(&components)?)?;

    let jsconfig = json!({
        "compilerOptions": {
            "baseUrl": ".",
            "paths": { "@/*": ["./src/*"] }
        }
    });
    project.write("jsconfig.json", &to_json(&jsconfig)?)?;

    if !layout.is_next() {
        let config = project.resolve(layout.bundler_config_candidates());
        project.patch(config, patch::add_vite_alias)?;
    }
    Ok(())
}

const UTILS_JS: &str = r#"import { clsx } from 'clsx';
import { twMerge } from 'tailwind-merge';

export function cn(...inputs) {
  return twMerge(clsx(inputs));
}
"#;

const THEME_CSS: &str = r#"@import "tailwindcss";

@custom-variant dark (&:is(.dark *));

:root {
  --radius: 0.625rem;
  --background: oklch(1 0 0);
  --foreground: oklch(0.145 0 0);
  --card: oklch(1 0 0);
  --card-foreground: oklch(0.145 0 0);
  --primary: oklch(0.205 0 0);
  --primary-foreground: oklch(0.985 0 0);
  --secondary: oklch(0.97 0 0);
  --secondary-foreground: oklch(0.205 0 0);
  --muted: oklch(0.97 0 0);
  --muted-foreground: oklch(0.556 0 0);
  --accent: oklch(0.97 0 0);
  --accent-foreground: oklch(0.205 0 0);
  --destructive: oklch(0.577 0.245 27.325);
  --border: oklch(0.922 0 0);
  --input: oklch(0.922 0 0);
  --ring: oklch(0.708 0 0);
}

.dark {
  --background: oklch(0.145 0 0);
  --foreground: oklch(0.985 0 0);
  --card: oklch(0.205 0 0);
  --card-foreground: oklch(0.985 0 0);
  --primary: oklch(0.922 0 0);
  --primary-foreground: oklch(0.205 0 0);
  --secondary: oklch(0.269 0 0);
  --secondary-foreground: oklch(0.985 0 0);
  --muted: oklch(0.269 0 0);
  --muted-foreground: oklch(0.708 0 0);
  --accent: oklch(0.269 0 0);
  --accent-foreground: oklch(0.985 0 0);
  --destructive: oklch(0.704 0.191 22.216);
  --border: oklch(1 0 0 / 10%);
  --input: oklch(1 0 0 / 15%);
  --ring: oklch(0.556 0 0);
}

@theme inline {
  --radius-sm: calc(var(--radius) - 4px);
  --radius-md: calc(var(--radius) - 2px);
  --radius-lg: var(--radius);
  --radius-xl: calc(var(--radius) + 4px);
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --color-card: var(--card);
  --color-card-foreground: var(--card-foreground);
  --color-primary: var(--primary);
  --color-primary-foreground: var(--primary-foreground);
  --color-secondary: var(--secondary);
  --color-secondary-foreground: var(--secondary-foreground);
  --color-muted: var(--muted);
  --color-muted-foreground: var(--muted-foreground);
  --color-accent: var(--accent);
  --color-accent-foreground: var(--accent-foreground);
  --color-destructive: var(--destructive);
  --color-border: var(--border);
  --color-input: var(--input);
  --color-ring: var(--ring);
}

@layer base {
  * {
    @apply border-border outline-ring/50;
  }
  body {
    @apply bg-background text-foreground;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Answers, Framework, Template};
    use crate::project::MemorySink;
    use crate::runtime::RecordingRunner;

    const VITE_MAIN: &str = "import { StrictMode } from 'react'\nimport './index.css'\nimport App from './App.jsx'\n";
    const VITE_CONFIG: &str = "import { defineConfig } from 'vite'\nimport react from '@vitejs/plugin-react'\n\nexport default defineConfig({\n  plugins: [react()],\n})\n";

    fn vite_project() -> Project<MemorySink> {
        let mut sink = MemorySink::new();
        sink.seed("app/src/main.jsx", VITE_MAIN);
        sink.seed("app/vite.config.js", VITE_CONFIG);
        sink.seed("app/index.html", "<html>\n  <head>\n    <title>app</title>\n  </head>\n</html>\n");
        Project::new("app", Layout::for_framework(Framework::Vite), sink)
    }

    fn answers(css: CssFramework) -> AnswerSet {
        Answers::new("app", Framework::Vite, Template::Basic, css)
            .finalize()
            .unwrap()
    }

    #[tokio::test]
    async fn test_tailwind_on_vite() {
        let mut project = vite_project();
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, &answers(CssFramework::Tailwind))
            .await
            .unwrap();

        assert_eq!(runner.commands(), vec!["npm install tailwindcss @tailwindcss/vite"]);
        let main = project.read("src/main.jsx").unwrap();
        assert!(main.starts_with("import './index.css';\n"));
        assert_eq!(main.matches("index.css").count(), 1);
        assert!(project.read("vite.config.js").unwrap().contains("tailwindcss(),"));
        assert_eq!(project.read("src/index.css").unwrap(), "@import \"tailwindcss\";\n");
    }

    #[tokio::test]
    async fn test_bootstrap_cdn_installs_nothing() {
        let mut project = vite_project();
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, &answers(CssFramework::BootstrapCdn))
            .await
            .unwrap();

        assert!(runner.invocations().is_empty());
        assert!(project.read("index.html").unwrap().contains("bootstrap@5.3.3"));
    }

    #[tokio::test]
    async fn test_mui_strips_stylesheet_imports() {
        let mut project = vite_project();
        let mut runner = RecordingRunner::new();
        install(&mut project, &mut runner, &answers(CssFramework::Mui))
            .await
            .unwrap();

        let main = project.read("src/main.jsx").unwrap();
        assert!(!main.contains(".css"));
        assert!(main.contains("import App from './App.jsx'"));
    }

    #[tokio::test]
    async fn test_component_library_setup() {
        let mut project = vite_project();
        let mut runner = RecordingRunner::new();
        let installed = install(&mut project, &mut runner, &answers(CssFramework::TailwindShadcn))
            .await
            .unwrap()
            .unwrap();

        assert!(installed.delegated.is_empty());
        assert!(project.exists("components.json"));
        assert!(project.exists("src/lib/utils.js"));
        assert!(project.read("vite.config.js").unwrap().contains("alias:"));
        assert!(project.read("src/index.css").unwrap().contains("@theme inline"));
    }

    #[test]
    fn test_next_tailwind_uses_postcss() {
        let pkgs = packages(CssFramework::Tailwind, Layout::for_framework(Framework::Next));
        assert_eq!(pkgs, vec!["tailwindcss", "@tailwindcss/postcss", "postcss"]);
    }
}
