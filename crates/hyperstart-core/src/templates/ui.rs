//! UI fragments shared by every page template
//!
//! Each element has two renderings: the component-library one (imports from
//! `@/components/ui/*`) and a hand-styled one (plain element with an inline
//! style object). `Ui` decides which; a fragment only records the imports of
//! the rendering it returns, so a page never pulls in both.

use crate::answers::AnswerSet;
use crate::project::Layout;
use std::collections::{BTreeMap, BTreeSet};

/// Rendering context for a page
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    library: bool,
    layout: Layout,
}

impl Ui {
    pub fn new(answers: &AnswerSet) -> Self {
        Self::with_library(answers.uses_component_library(), answers.layout())
    }

    pub fn with_library(library: bool, layout: Layout) -> Self {
        Self { library, layout }
    }

    pub fn library(&self) -> bool {
        self.library
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Module a page imports `src/<path>` from
    pub fn src_import(&self, path: &str) -> String {
        format!("../{}", path)
    }
}

#[derive(Debug, Default, Clone)]
struct ModuleImport {
    default: Option<String>,
    named: BTreeSet<String>,
}

/// Import statements collected while a module is assembled
#[derive(Debug, Default, Clone)]
pub struct Imports {
    modules: BTreeMap<String, ModuleImport>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(&mut self, module: &str, names: &[&str]) -> &mut Self {
        let entry = self.modules.entry(module.to_string()).or_default();
        entry.named.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn default_import(&mut self, module: &str, name: &str) -> &mut Self {
        self.modules.entry(module.to_string()).or_default().default = Some(name.to_string());
        self
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// react first, then packages, then `@/` aliases, then relative paths
    pub fn render(&self) -> String {
        let rank = |module: &str| {
            if module == "react" {
                0
            } else if module.starts_with("@/") {
                2
            } else if module.starts_with('.') {
                3
            } else {
                1
            }
        };
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort_by_key(|(m, _)| (rank(m), m.as_str()));

        let mut out = String::new();
        for (module, import) in modules {
            let mut clauses = Vec::new();
            if let Some(default) = &import.default {
                clauses.push(default.clone());
            }
            if !import.named.is_empty() {
                let names: Vec<_> = import.named.iter().map(String::as_str).collect();
                clauses.push(format!("{{ {} }}", names.join(", ")));
            }
            if clauses.is_empty() {
                out.push_str(&format!("import '{}';\n", module));
            } else {
                out.push_str(&format!("import {} from '{}';\n", clauses.join(", "), module));
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Outline,
    Ghost,
}

impl Variant {
    fn library_attr(&self) -> &'static str {
        match self {
            Variant::Primary => "",
            Variant::Outline => " variant=\"outline\"",
            Variant::Ghost => " variant=\"ghost\"",
        }
    }

    fn inline_style(&self) -> &'static str {
        match self {
            Variant::Primary => "{ padding: '0.5rem 1rem', background: '#2563eb', color: 'white', border: 'none', borderRadius: '0.375rem', cursor: 'pointer', fontWeight: 500 }",
            Variant::Outline => "{ padding: '0.5rem 1rem', background: 'white', color: '#111827', border: '1px solid #d1d5db', borderRadius: '0.375rem', cursor: 'pointer' }",
            Variant::Ghost => "{ padding: '0.5rem 1rem', background: 'transparent', color: '#374151', border: 'none', borderRadius: '0.375rem', cursor: 'pointer' }",
        }
    }
}

fn ui_module(component: &str) -> String {
    format!("@/components/ui/{}", component)
}

fn attrs(extra: &str) -> String {
    if extra.trim().is_empty() {
        String::new()
    } else {
        format!(" {}", extra.trim())
    }
}

pub fn button(ui: &Ui, imports: &mut Imports, label: &str, extra: &str, variant: Variant) -> String {
    if ui.library {
        imports.named(&ui_module("button"), &["Button"]);
        format!("<Button{}{}>{}</Button>", attrs(extra), variant.library_attr(), label)
    } else {
        format!(
            "<button{} style={{{}}}>{}</button>",
            attrs(extra),
            variant.inline_style(),
            label
        )
    }
}

/// A card with optional title and description. `body` is inserted as-is.
pub fn card(
    ui: &Ui,
    imports: &mut Imports,
    extra: &str,
    title: Option<&str>,
    description: Option<&str>,
    body: &str,
) -> String {
    let body = indent(body, 4);
    if ui.library {
        let mut names = vec!["Card", "CardContent"];
        let mut header = String::new();
        if title.is_some() || description.is_some() {
            names.push("CardHeader");
            header.push_str("  <CardHeader>\n");
            if let Some(title) = title {
                names.push("CardTitle");
                header.push_str(&format!("    <CardTitle>{}</CardTitle>\n", title));
            }
            if let Some(description) = description {
                names.push("CardDescription");
                header.push_str(&format!(
                    "    <CardDescription>{}</CardDescription>\n",
                    description
                ));
            }
            header.push_str("  </CardHeader>\n");
        }
        imports.named(&ui_module("card"), &names);
        format!(
            "<Card{}>\n{}  <CardContent>\n{}\n  </CardContent>\n</Card>",
            attrs(extra),
            header,
            body
        )
    } else {
        let mut header = String::new();
        if let Some(title) = title {
            header.push_str(&format!(
                "  <h3 style={{{{ fontSize: '1.125rem', fontWeight: 600, marginBottom: '0.25rem' }}}}>{}</h3>\n",
                title
            ));
        }
        if let Some(description) = description {
            header.push_str(&format!(
                "  <p style={{{{ color: '#6b7280', fontSize: '0.875rem', marginBottom: '1rem' }}}}>{}</p>\n",
                description
            ));
        }
        format!(
            "<div{} style={{{{ background: 'white', padding: '1.5rem', borderRadius: '0.5rem', border: '1px solid #e5e7eb', boxShadow: '0 1px 3px rgba(0, 0, 0, 0.1)' }}}}>\n{}  <div>\n{}\n  </div>\n</div>",
            attrs(extra),
            header,
            body
        )
    }
}

pub fn input(ui: &Ui, imports: &mut Imports, extra: &str) -> String {
    if ui.library {
        imports.named(&ui_module("input"), &["Input"]);
        format!("<Input{} />", attrs(extra))
    } else {
        format!(
            "<input{} style={{{{ width: '100%', padding: '0.5rem 0.75rem', border: '1px solid #d1d5db', borderRadius: '0.375rem' }}}} />",
            attrs(extra)
        )
    }
}

pub fn textarea(ui: &Ui, imports: &mut Imports, extra: &str) -> String {
    if ui.library {
        imports.named(&ui_module("textarea"), &["Textarea"]);
        format!("<Textarea{} />", attrs(extra))
    } else {
        format!(
            "<textarea{} style={{{{ width: '100%', minHeight: '6rem', padding: '0.5rem 0.75rem', border: '1px solid #d1d5db', borderRadius: '0.375rem', fontFamily: 'inherit' }}}} />",
            attrs(extra)
        )
    }
}

pub fn label(ui: &Ui, imports: &mut Imports, html_for: &str, text: &str) -> String {
    if ui.library {
        imports.named(&ui_module("label"), &["Label"]);
        format!("<Label htmlFor=\"{}\">{}</Label>", html_for, text)
    } else {
        format!(
            "<label htmlFor=\"{}\" style={{{{ display: 'block', fontSize: '0.875rem', fontWeight: 500, marginBottom: '0.25rem' }}}}>{}</label>",
            html_for, text
        )
    }
}

pub fn badge(ui: &Ui, imports: &mut Imports, text: &str, extra: &str) -> String {
    if ui.library {
        imports.named(&ui_module("badge"), &["Badge"]);
        format!("<Badge{} variant=\"secondary\">{}</Badge>", attrs(extra), text)
    } else {
        format!(
            "<span{} style={{{{ display: 'inline-block', padding: '0.125rem 0.5rem', borderRadius: '9999px', background: '#f3f4f6', color: '#374151', fontSize: '0.75rem', fontWeight: 500 }}}}>{}</span>",
            attrs(extra),
            text
        )
    }
}

/// Progress bar; `value` is a JS expression between 0 and 100
pub fn progress(ui: &Ui, imports: &mut Imports, value: &str) -> String {
    if ui.library {
        imports.named(&ui_module("progress"), &["Progress"]);
        format!("<Progress value={{{}}} />", value)
    } else {
        format!(
            "<div style={{{{ height: '0.5rem', background: '#e5e7eb', borderRadius: '9999px', overflow: 'hidden' }}}}>\n  <div style={{{{ width: `${{{}}}%`, height: '100%', background: '#2563eb' }}}} />\n</div>",
            value
        )
    }
}

/// Fields every service hook returns first
pub const HOOK_FIELDS: [&str; 3] = ["data", "loading", "error"];

/// Object literal `{ data, loading, error, ...extra }`
pub fn hook_object(extra: &[&str]) -> String {
    let fields: Vec<&str> = HOOK_FIELDS
        .iter()
        .copied()
        .chain(extra.iter().copied().filter(|f| !HOOK_FIELDS.contains(f)))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}

/// Return statement of a service hook
pub fn hook_return(extra: &[&str]) -> String {
    format!("return {};", hook_object(extra))
}

/// Text safe to place between JSX tags. Anything JSX would interpret is
/// emitted as a string expression instead.
pub fn jsx_text(text: &str) -> String {
    if text.chars().any(|c| matches!(c, '{' | '}' | '<' | '>' | '&' | '"' | '\'' | '`' | '\\')) {
        format!("{{{}}}", js_string(text))
    } else {
        text.to_string()
    }
}

/// Double-quoted JS string literal
pub fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Indent every non-empty line by `spaces`
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble a module: directive, imports, then the given blocks
pub fn module(ui: &Ui, imports: &Imports, blocks: &[String]) -> String {
    let mut out = String::from(ui.layout.client_directive());
    let rendered = imports.render();
    if !rendered.is_empty() {
        out.push_str(&rendered);
        out.push('\n');
    }
    out.push_str(
        &blocks
            .iter()
            .map(|b| b.trim_end().to_string())
            .filter(|b| !b.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
    );
    out.push('\n');
    out
}

/// `function Name(props) { <setup> return ( <jsx> ); }`
pub fn component(name: &str, props: &str, setup: &str, jsx: &str, export_default: bool) -> String {
    let export = if export_default { "export default " } else { "" };
    let setup = if setup.trim().is_empty() {
        String::new()
    } else {
        format!("{}\n\n", indent(setup.trim_matches('\n'), 2))
    };
    format!(
        "{}function {}({}) {{\n{}  return (\n{}\n  );\n}}",
        export,
        name,
        props,
        setup,
        indent(jsx.trim_matches('\n'), 4)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Framework;

    fn ui(library: bool) -> Ui {
        Ui::with_library(library, Layout::for_framework(Framework::Vite))
    }

    #[test]
    fn test_button_renderings_are_exclusive() {
        let mut lib_imports = Imports::new();
        let lib = button(&ui(true), &mut lib_imports, "Save", "onClick={save}", Variant::Outline);
        assert_eq!(lib, "<Button onClick={save} variant=\"outline\">Save</Button>");
        assert!(lib_imports.has_module("@/components/ui/button"));

        let mut plain_imports = Imports::new();
        let plain = button(&ui(false), &mut plain_imports, "Save", "", Variant::Primary);
        assert!(plain.starts_with("<button style={{ padding"));
        assert!(plain_imports.is_empty());
    }

    #[test]
    fn test_card_imports_only_used_parts() {
        let mut imports = Imports::new();
        card(&ui(true), &mut imports, "", Some("Stats"), None, "<p>1</p>");
        assert_eq!(
            imports.render(),
            "import { Card, CardContent, CardHeader, CardTitle } from '@/components/ui/card';\n"
        );
    }

    #[test]
    fn test_imports_render_order_and_merge() {
        let mut imports = Imports::new();
        imports.named("../hooks/useAuth", &["useAuth"]);
        imports.named("react", &["useState"]);
        imports.named("react", &["useEffect"]);
        imports.default_import("axios", "axios");
        imports.named("@/components/ui/badge", &["Badge"]);

        assert_eq!(
            imports.render(),
            "import { useEffect, useState } from 'react';\n\
             import axios from 'axios';\n\
             import { Badge } from '@/components/ui/badge';\n\
             import { useAuth } from '../hooks/useAuth';\n"
        );
    }

    #[test]
    fn test_hook_return_leads_with_state_fields() {
        assert_eq!(
            hook_return(&["upload", "error", "progress"]),
            "return { data, loading, error, upload, progress };"
        );
    }

    #[test]
    fn test_jsx_text_escapes_special_names() {
        assert_eq!(jsx_text("my app"), "my app");
        assert_eq!(jsx_text("café ☕"), "café ☕");
        assert_eq!(jsx_text("a{b}"), "{\"a{b}\"}");
        assert_eq!(jsx_text("say \"hi\""), "{\"say \\\"hi\\\"\"}");
    }

    #[test]
    fn test_component_layout() {
        let out = component("Home", "", "const a = 1;", "<div>{a}</div>", true);
        assert_eq!(
            out,
            "export default function Home() {\n  const a = 1;\n\n  return (\n    <div>{a}</div>\n  );\n}"
        );
    }

    #[test]
    fn test_module_adds_client_directive_for_next() {
        let next = Ui::with_library(false, Layout::for_framework(Framework::Next));
        let mut imports = Imports::new();
        imports.named("react", &["useState"]);
        let out = module(&next, &imports, &["export default function X() {}".to_string()]);
        assert!(out.starts_with("'use client';\n\nimport { useState } from 'react';\n\nexport default"));
    }
}
