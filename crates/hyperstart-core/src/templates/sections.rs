//! Page sections backed by an optional service
//!
//! A section exists only when its service was selected, so a page without
//! auth never renders a logout button and a page without storage never
//! imports the upload hook.

use super::ui::{self, Imports, Ui, Variant};
use crate::answers::{AnswerSet, FirebaseService};

/// Hook calls a section needs plus the JSX it renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub setup: String,
    pub jsx: String,
}

/// Wrap page content in `ProtectedRoute` when auth is on
pub fn protect(ui: &Ui, imports: &mut Imports, answers: &AnswerSet, jsx: &str) -> String {
    if !answers.has_firebase(FirebaseService::Auth) {
        return jsx.to_string();
    }
    imports.named(&ui.src_import("components/auth/ProtectedRoute"), &["ProtectedRoute"]);
    format!("<ProtectedRoute>\n{}\n</ProtectedRoute>", ui::indent(jsx, 2))
}

/// Signed-in user and logout button
pub fn account(ui: &Ui, imports: &mut Imports, answers: &AnswerSet) -> Option<Section> {
    if !answers.has_firebase(FirebaseService::Auth) {
        return None;
    }
    imports.named(&ui.src_import("hooks/useAuth"), &["useAuth"]);
    let logout = ui::button(ui, imports, "Logout", "onClick={logout}", Variant::Outline);
    Some(Section {
        setup: "const { user, logout } = useAuth();".to_string(),
        jsx: format!(
            "<div style={{{{ display: 'flex', alignItems: 'center', gap: '1rem' }}}}>\n  <span>Welcome, {{user?.displayName || user?.email}}</span>\n  {}\n</div>",
            logout
        ),
    })
}

/// `const <var> = ...` reading a Firestore collection when the database is
/// on, the sample constant otherwise. Sample data also fills an empty collection.
pub fn records(
    ui: &Ui,
    imports: &mut Imports,
    answers: &AnswerSet,
    var: &str,
    collection: &str,
    options: &str,
    sample: &str,
) -> String {
    if !answers.has_firebase(FirebaseService::Database) {
        return format!("const {} = {};", var, sample);
    }
    imports.named(&ui.src_import("hooks/useFirestore"), &["useCollection"]);
    let docs = format!("{}Docs", var);
    let options = if options.is_empty() {
        String::new()
    } else {
        format!(", {}", options)
    };
    format!(
        "const {{ data: {docs} }} = useCollection('{collection}'{options});\nconst {var} = {docs}.length > 0 ? {docs} : {sample};",
        docs = docs,
        collection = collection,
        options = options,
        var = var,
        sample = sample,
    )
}

/// Writer for a Firestore collection, `None` without the database
pub fn writer(ui: &Ui, imports: &mut Imports, answers: &AnswerSet, name: &str, collection: &str) -> Option<String> {
    if !answers.has_firebase(FirebaseService::Database) {
        return None;
    }
    imports.named(&ui.src_import("hooks/useFirestore"), &["useFirestore"]);
    Some(format!(
        "const {{ addDocument: {}, loading: saving }} = useFirestore('{}');",
        name, collection
    ))
}

/// File upload widget writing under `folder/`
pub fn upload(ui: &Ui, imports: &mut Imports, answers: &AnswerSet, folder: &str, label: &str) -> Option<Section> {
    if !answers.has_firebase(FirebaseService::Storage) {
        return None;
    }
    imports.named(&ui.src_import("hooks/useStorage"), &["useStorage"]);
    let field = ui::label(ui, imports, "upload", label);
    let picker = ui::input(ui, imports, "id=\"upload\" type=\"file\" onChange={handleUpload} disabled={uploading}");
    let bar = ui::progress(ui, imports, "progress");

    let setup = format!(
        "const {{ data: uploaded, loading: uploading, error: uploadError, progress, uploadFile }} = useStorage();\n\n\
         const handleUpload = async (e) => {{\n  \
           const file = e.target.files?.[0];\n  \
           if (!file) return;\n  \
           await uploadFile(file, `{}/${{Date.now()}}-${{file.name}}`);\n\
         }};",
        folder
    );
    let jsx = format!(
        "<div style={{{{ display: 'flex', flexDirection: 'column', gap: '0.5rem' }}}}>\n  {}\n  {}\n  {{uploading && (\n{}\n  )}}\n  {{uploaded && <a href={{uploaded.url}} target=\"_blank\" rel=\"noreferrer\">{{uploaded.name}}</a>}}\n  {{uploadError && <p style={{{{ color: '#dc2626', fontSize: '0.875rem' }}}}>{{uploadError}}</p>}}\n</div>",
        field,
        picker,
        ui::indent(&bar, 4)
    );
    Some(Section { setup, jsx })
}

/// Checkout button; `call` is the `startCheckout(...)` argument list
pub fn checkout(ui: &Ui, imports: &mut Imports, answers: &AnswerSet, label: &str, call: &str) -> Option<Section> {
    if !answers.include_payments() {
        return None;
    }
    imports.named(&ui.src_import("hooks/useCheckout"), &["useCheckout"]);
    let button = ui::button(
        ui,
        imports,
        &format!("{{checkoutLoading ? 'Redirecting...' : {}}}", ui::js_string(label)),
        &format!("onClick={{() => startCheckout({})}} disabled={{checkoutLoading}}", call),
        Variant::Primary,
    );
    Some(Section {
        setup: "const { startCheckout, loading: checkoutLoading, error: checkoutError } = useCheckout();"
            .to_string(),
        jsx: format!(
            "<div>\n  {}\n  {{checkoutError && <p style={{{{ color: '#dc2626', fontSize: '0.875rem' }}}}>{{checkoutError}}</p>}}\n</div>",
            button
        ),
    })
}

/// Setup lines of the present sections, in order
pub fn setup<'a>(sections: impl IntoIterator<Item = &'a Option<Section>>) -> String {
    sections
        .into_iter()
        .flatten()
        .map(|s| s.setup.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join setup fragments line by line, skipping empty ones. An empty string
/// between two fragments still reads as "blank line here" when both sides exist.
pub fn join(parts: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for part in parts {
        if part.is_empty() {
            if out.last().is_some_and(|last| !last.is_empty()) {
                out.push("");
            }
        } else {
            out.push(part.trim_matches('\n'));
        }
    }
    while out.last().is_some_and(|last| last.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// JSX of a section, or the fallback when it is absent
pub fn jsx_or(section: &Option<Section>, fallback: &str) -> String {
    section
        .as_ref()
        .map(|s| s.jsx.clone())
        .unwrap_or_else(|| fallback.to_string())
}
