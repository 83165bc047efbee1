//! Template composition
//!
//! `compose` dispatches on the chosen template and writes its page plus the
//! root component that mounts it. Page text is assembled from the fragments
//! in `ui`; templates never hard-code a single rendering of a UI element.

pub mod ai_saas;
pub mod basic;
pub mod blog;
pub mod dashboard;
pub mod ecommerce;
pub mod landing;
pub mod learning;
pub mod project_mgmt;
pub mod sections;
pub mod social;
pub mod ui;

use crate::answers::{AnswerSet, FirebaseService, Template};
use crate::error::Result;
use crate::project::{FileSink, Project};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use ui::{Imports, Ui};

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("Invalid regex pattern"));

/// Replace `{{KEY}}` tokens in one pass, so inserted values are never
/// scanned for tokens themselves. Continuation lines of a multi-line value
/// are indented to the column of the line holding the token, and a line
/// holding nothing but a token whose value is empty is dropped. Unknown
/// tokens are left as they are.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let lookup = |key: &str| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

    template
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !TOKEN.captures(trimmed).is_some_and(|caps| {
                caps[0].len() == trimmed.len() && lookup(&caps[1]) == Some("")
            })
        })
        .map(|line| {
            let pad: String = line.chars().take_while(|c| *c == ' ').collect();
            TOKEN
                .replace_all(line, |caps: &Captures| match lookup(&caps[1]) {
                    Some(value) => continuation_indent(value, &pad),
                    None => caps[0].to_string(),
                })
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn continuation_indent(value: &str, pad: &str) -> String {
    value
        .split('\n')
        .enumerate()
        .map(|(i, l)| {
            if i == 0 || l.is_empty() {
                l.to_string()
            } else {
                format!("{}{}", pad, l)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A page module written into the pages directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Component (and file) name, e.g. `Dashboard`
    pub component: &'static str,
    pub source: String,
}

/// Page a template produces, or `None` for the basic template
pub fn render_page(answers: &AnswerSet) -> Option<Page> {
    let ui = Ui::new(answers);
    let (component, source) = match answers.template() {
        Template::Basic => return None,
        Template::Dashboard => (dashboard::COMPONENT, dashboard::render(&ui, answers)),
        Template::Blog => (blog::COMPONENT, blog::render(&ui, answers)),
        Template::Ecommerce => (ecommerce::COMPONENT, ecommerce::render(&ui, answers)),
        Template::Landing => (landing::COMPONENT, landing::render(&ui, answers)),
        Template::AiSaas => (ai_saas::COMPONENT, ai_saas::render(&ui, answers)),
        Template::Social => (social::COMPONENT, social::render(&ui, answers)),
        Template::ProjectMgmt => (project_mgmt::COMPONENT, project_mgmt::render(&ui, answers)),
        Template::Learning => (learning::COMPONENT, learning::render(&ui, answers)),
    };
    Some(Page { component, source })
}

/// Write the template's page and mount it from the root component
pub fn compose<S: FileSink>(project: &mut Project<S>, answers: &AnswerSet) -> Result<Option<Page>> {
    let Some(page) = render_page(answers) else {
        return Ok(None);
    };
    let layout = project.layout();

    project.create_dir(layout.pages_dir())?;
    project.write(&layout.page_file(page.component), &page.source)?;

    let root = project.resolve(layout.root_component_candidates());
    project.write(root, &root_component(answers, page.component))?;

    Ok(Some(page))
}

/// Root component that mounts a template page, inside `AuthProvider` when auth is on
pub fn root_component(answers: &AnswerSet, page: &str) -> String {
    let layout = answers.layout();
    let ui = Ui::with_library(false, layout);
    let to_src = layout.root_to_src();
    let mut imports = Imports::new();
    imports.default_import(&layout.page_import(page), page);

    let name = if layout.is_next() { "Home" } else { "App" };
    let jsx = if answers.has_firebase(FirebaseService::Auth) {
        imports.named(&format!("{}hooks/useAuth", to_src), &["AuthProvider"]);
        format!("<AuthProvider>\n  <{} />\n</AuthProvider>", page)
    } else {
        format!("<{} />", page)
    };

    ui::module(&ui, &imports, &[ui::component(name, "", "", &jsx, true)])
}
