//! Pure text edits applied to files the base scaffold generated
//!
//! Every function takes the current text and returns the edited text. When
//! the pattern an edit looks for is absent, the text comes back unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static VITE_PLUGINS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"plugins:\s*\[").expect("Invalid regex pattern"));

static VITE_DEFINE_CONFIG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"defineConfig\(\s*\{").expect("Invalid regex pattern"));

static HTML_HEAD_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</head>").expect("Invalid regex pattern"));

static JSX_HTML_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<html[^>]*>").expect("Invalid regex pattern"));

static USE_CLIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*['"]use client['"];?[ \t]*\r?\n?"#).expect("Invalid regex pattern")
});

fn import_pattern(specifier: &str) -> Regex {
    let spec = regex::escape(specifier);
    // `import x from '<spec>'`, `import { a } from "<spec>"` and bare `import '<spec>'`
    let pattern = format!(
        r#"(?m)^[ \t]*import\s+(?:[\w*{{}}\s,]+\s+from\s+)?['"]{spec}['"][ \t]*;?[ \t]*\r?\n?"#
    );
    Regex::new(&pattern).expect("escaped specifier always forms a valid pattern")
}

/// Remove every import statement of `specifier`
pub fn remove_import(text: &str, specifier: &str) -> String {
    import_pattern(specifier).replace_all(text, "").into_owned()
}

pub fn has_import(text: &str, specifier: &str) -> bool {
    import_pattern(specifier).is_match(text)
}

/// Prepend an import line unless the module already imports it.
/// Stays below a leading `'use client'` directive.
pub fn prepend_import(text: &str, specifier: &str, statement: &str) -> String {
    if has_import(text, specifier) {
        return text.to_string();
    }
    let line = format!("{}\n", statement.trim_end());
    match USE_CLIENT.find(text) {
        Some(directive) => {
            let (head, rest) = text.split_at(directive.end());
            let head = if head.ends_with('\n') {
                head.to_string()
            } else {
                format!("{}\n", head)
            };
            format!("{}{}{}", head, line, rest)
        }
        None => format!("{}{}", line, text),
    }
}

/// Swap one stylesheet import for another (or just drop it when `replacement` is `None`)
pub fn replace_import(
    text: &str,
    removed: &[&str],
    replacement: Option<(&str, &str)>,
) -> String {
    let stripped = removed
        .iter()
        .fold(text.to_string(), |acc, spec| remove_import(&acc, spec));
    match replacement {
        Some((specifier, statement)) => prepend_import(&stripped, specifier, statement),
        None => stripped,
    }
}

/// Add a plugin call to the `plugins: [` array of a Vite config and import it
pub fn register_vite_plugin(text: &str, specifier: &str, import: &str, call: &str) -> String {
    let mut out = prepend_import(text, specifier, import);
    if !out.contains(call) {
        if let Some(m) = VITE_PLUGINS.find(&out) {
            out.insert_str(m.end(), &format!("\n    {},", call));
        }
    }
    out
}

/// Add the `@` -> `./src` resolve alias to a Vite config
pub fn add_vite_alias(text: &str) -> String {
    if text.contains("alias:") {
        return text.to_string();
    }
    let Some(m) = VITE_DEFINE_CONFIG.find(text) else {
        return text.to_string();
    };
    let mut out = text.to_string();
    out.insert_str(
        m.end(),
        "\n  resolve: {\n    alias: {\n      '@': path.resolve(__dirname, './src'),\n    },\n  },",
    );
    prepend_import(&out, "path", "import path from 'path'")
}

/// Insert markup right before `</head>` of an HTML document
pub fn insert_into_head(text: &str, markup: &str) -> String {
    if text.contains(markup.trim()) {
        return text.to_string();
    }
    match HTML_HEAD_CLOSE.find(text) {
        Some(m) => {
            let mut out = text.to_string();
            out.insert_str(m.start(), &format!("  {}\n  ", markup.trim()));
            out
        }
        None => text.to_string(),
    }
}

/// Insert JSX right after the opening `<html ...>` element of a Next.js layout
pub fn insert_after_html_open(text: &str, markup: &str) -> String {
    if text.contains(markup.trim()) {
        return text.to_string();
    }
    match JSX_HTML_OPEN.find(text) {
        Some(m) => {
            let mut out = text.to_string();
            out.insert_str(m.end(), &format!("\n      <head>{}</head>", markup.trim()));
            out
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITE_MAIN: &str = "import { StrictMode } from 'react'\nimport { createRoot } from 'react-dom/client'\nimport './index.css'\nimport App from './App.jsx'\n";

    #[test]
    fn test_remove_bare_import_either_quote() {
        let out = remove_import(VITE_MAIN, "./index.css");
        assert!(!out.contains("index.css"));
        assert!(out.contains("import App from './App.jsx'"));

        let double = remove_import("import \"./App.css\";\nconst a = 1;\n", "./App.css");
        assert_eq!(double, "const a = 1;\n");
    }

    #[test]
    fn test_remove_default_and_named_imports() {
        let text = "import styles from './page.module.css';\nimport { a, b } from './page.module.css'\nexport default 1;\n";
        assert_eq!(remove_import(text, "./page.module.css"), "export default 1;\n");
    }

    #[test]
    fn test_remove_import_absent_is_noop() {
        assert_eq!(remove_import(VITE_MAIN, "./missing.css"), VITE_MAIN);
    }

    #[test]
    fn test_remove_import_does_not_match_prefix() {
        let text = "import './index.css.map'\n";
        assert_eq!(remove_import(text, "./index.css"), text);
    }

    #[test]
    fn test_prepend_import_is_idempotent() {
        let once = prepend_import(VITE_MAIN, "bootstrap/dist/css/bootstrap.min.css", "import 'bootstrap/dist/css/bootstrap.min.css';");
        let twice = prepend_import(&once, "bootstrap/dist/css/bootstrap.min.css", "import 'bootstrap/dist/css/bootstrap.min.css';");
        assert_eq!(once, twice);
        assert!(once.starts_with("import 'bootstrap/dist/css/bootstrap.min.css';\n"));
    }

    #[test]
    fn test_prepend_import_keeps_use_client_first() {
        let text = "'use client';\n\nexport default function Page() {}\n";
        let out = prepend_import(text, "react", "import { useState } from 'react';");
        assert!(out.starts_with("'use client';\nimport { useState } from 'react';\n"));
    }

    #[test]
    fn test_register_vite_plugin() {
        let config = "import { defineConfig } from 'vite'\nimport react from '@vitejs/plugin-react'\n\nexport default defineConfig({\n  plugins: [react()],\n})\n";
        let out = register_vite_plugin(config, "@tailwindcss/vite", "import tailwindcss from '@tailwindcss/vite'", "tailwindcss()");
        assert!(out.starts_with("import tailwindcss from '@tailwindcss/vite'\n"));
        assert!(out.contains("plugins: [\n    tailwindcss(),react()]"));
        assert_eq!(register_vite_plugin(&out, "@tailwindcss/vite", "import tailwindcss from '@tailwindcss/vite'", "tailwindcss()"), out);
    }

    #[test]
    fn test_add_vite_alias() {
        let config = "import { defineConfig } from 'vite'\n\nexport default defineConfig({\n  plugins: [],\n})\n";
        let out = add_vite_alias(config);
        assert!(out.contains("'@': path.resolve(__dirname, './src')"));
        assert!(out.starts_with("import path from 'path'\n"));
        assert_eq!(add_vite_alias(&out), out);
    }

    #[test]
    fn test_insert_into_head() {
        let html = "<html>\n  <head>\n    <title>x</title>\n  </head>\n</html>\n";
        let link = "<link rel=\"stylesheet\" href=\"b.css\" />";
        let out = insert_into_head(html, link);
        assert!(out.contains("<link rel=\"stylesheet\" href=\"b.css\" />\n  </head>"));
        assert_eq!(insert_into_head(&out, link), out);
        assert_eq!(insert_into_head("no head here", link), "no head here");
    }

    #[test]
    fn test_insert_after_html_open() {
        let layout = "return (\n    <html lang=\"en\">\n      <body>{children}</body>\n    </html>\n  );";
        let out = insert_after_html_open(layout, "<link rel=\"stylesheet\" href=\"b.css\" />");
        assert!(out.contains("<html lang=\"en\">\n      <head><link rel=\"stylesheet\" href=\"b.css\" /></head>"));
    }
}
