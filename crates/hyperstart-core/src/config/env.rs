//! `.env.example` as a union of every installer's keys
//!
//! Installers never overwrite the file. Each one merges its section in and
//! only keys not already present are appended, so the final key set is the
//! union of everything selected and the first occurrence of a key wins.

use crate::error::Result;
use crate::project::{FileSink, Project};
use std::collections::BTreeSet;

pub const ENV_EXAMPLE: &str = ".env.example";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EnvLine {
    Comment(String),
    Var(EnvVar),
}

/// A titled group of variables contributed by one installer
#[derive(Debug, Clone, Default)]
pub struct EnvSection {
    title: String,
    lines: Vec<EnvLine>,
}

impl EnvSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Comment line, kept in place among the variables
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.lines.push(EnvLine::Comment(note.into()));
        self
    }

    pub fn var(mut self, key: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.lines.push(EnvLine::Var(EnvVar {
            key: key.into(),
            placeholder: placeholder.into(),
        }));
        self
    }

    pub fn vars(&self) -> impl Iterator<Item = &EnvVar> {
        self.lines.iter().filter_map(|line| match line {
            EnvLine::Var(var) => Some(var),
            EnvLine::Comment(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.vars().next().is_none()
    }
}

/// Keys defined in an env file, ignoring comments and blank lines
pub fn parse_keys(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().trim_start_matches("export ").trim().to_string())
        .filter(|key| !key.is_empty())
        .collect()
}

/// Append the section's missing keys to `existing`.
///
/// Returns the merged text and the keys that were added. When nothing is
/// missing the text comes back unchanged.
pub fn merge(existing: &str, section: &EnvSection) -> (String, Vec<String>) {
    let mut present = parse_keys(existing);
    let mut added = Vec::new();
    let mut body = String::new();
    for line in &section.lines {
        match line {
            EnvLine::Comment(note) => body.push_str(&format!("# {}\n", note)),
            EnvLine::Var(var) if present.insert(var.key.clone()) => {
                body.push_str(&format!("{}={}\n", var.key, var.placeholder));
                added.push(var.key.clone());
            }
            EnvLine::Var(_) => {}
        }
    }

    if added.is_empty() {
        return (existing.to_string(), Vec::new());
    }

    let mut out = existing.to_string();
    if !out.is_empty() {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&format!("# {}\n", section.title));
    out.push_str(&body);
    (out, added)
}

/// Merge a section into the project's `.env.example`, creating it if needed
pub fn merge_env_example<S: FileSink>(
    project: &mut Project<S>,
    section: &EnvSection,
) -> Result<Vec<String>> {
    if section.is_empty() {
        return Ok(Vec::new());
    }

    if !project.exists(ENV_EXAMPLE) {
        let (text, added) = merge("", section);
        project.write(ENV_EXAMPLE, &text)?;
        return Ok(added);
    }

    let mut added = Vec::new();
    project.patch(ENV_EXAMPLE, |existing| {
        let (text, keys) = merge(existing, section);
        added = keys;
        text
    })?;
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Framework;
    use crate::project::{Layout, MemorySink};

    fn firebase() -> EnvSection {
        EnvSection::new("Firebase")
            .note("Firebase Console > Project Settings")
            .var("VITE_FIREBASE_API_KEY", "your-api-key")
            .var("VITE_FIREBASE_PROJECT_ID", "your-project-id")
    }

    #[test]
    fn test_parse_keys_skips_comments() {
        let keys = parse_keys("# title\nA=1\n\n  B = 2\n#C=3\nexport D=4\n");
        assert_eq!(
            keys.into_iter().collect::<Vec<_>>(),
            vec!["A", "B", "D"]
        );
    }

    #[test]
    fn test_merge_into_empty() {
        let (text, added) = merge("", &firebase());
        assert_eq!(
            text,
            "# Firebase\n# Firebase Console > Project Settings\nVITE_FIREBASE_API_KEY=your-api-key\nVITE_FIREBASE_PROJECT_ID=your-project-id\n"
        );
        assert_eq!(added.len(), 2);
    }

    #[test]
    fn test_merge_keeps_first_occurrence() {
        let existing = "VITE_FIREBASE_API_KEY=already-set\n";
        let (text, added) = merge(existing, &firebase());
        assert_eq!(added, vec!["VITE_FIREBASE_PROJECT_ID"]);
        assert!(text.contains("VITE_FIREBASE_API_KEY=already-set"));
        assert!(!text.contains("your-api-key"));
    }

    /// A project root holding only the scaffold's package.json
    fn scaffolded(framework: Framework) -> Project<MemorySink> {
        let mut sink = MemorySink::new();
        sink.seed("app/package.json", "{}");
        Project::new("app", Layout::for_framework(framework), sink)
    }

    #[test]
    fn test_merge_env_example_is_union() {
        let mut project = scaffolded(Framework::Vite);
        merge_env_example(&mut project, &firebase()).unwrap();
        merge_env_example(
            &mut project,
            &EnvSection::new("API").var("VITE_API_URL", "http://localhost:5000"),
        )
        .unwrap();
        let again = merge_env_example(&mut project, &firebase()).unwrap();
        assert!(again.is_empty());

        let keys = parse_keys(&project.read(ENV_EXAMPLE).unwrap());
        assert_eq!(keys.len(), 3);
        assert_eq!(project.changes().len(), 2);
        assert!(keys.contains("VITE_API_URL"));
    }

    #[test]
    fn test_empty_section_writes_nothing() {
        let mut project = scaffolded(Framework::Next);
        merge_env_example(&mut project, &EnvSection::new("Nothing")).unwrap();
        assert!(project.changes().is_empty());
        assert!(!project.exists(ENV_EXAMPLE));
    }
}
