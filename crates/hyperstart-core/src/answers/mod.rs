//! The Answer Set: every choice the user made, collected before generation
//!
//! `Answers` is the raw form filled by the prompts or loaded from a YAML file.
//! `Answers::finalize` validates it and produces the immutable `AnswerSet`
//! every downstream component reads from.

pub mod choices;

pub use choices::{
    parse_choice, AiFeature, AiProvider, Choice, CssFramework, ExtraPackage, FirebaseService,
    Framework, Template,
};

use crate::error::{Result, ScaffoldError};
use crate::project::Layout;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Raw answers, as collected
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Answers {
    pub project_name: String,
    pub framework: Framework,
    pub template: Template,
    pub css_framework: CssFramework,
    #[serde(default)]
    pub firebase_services: BTreeSet<FirebaseService>,
    #[serde(default)]
    pub component_library_components: BTreeSet<String>,
    #[serde(default)]
    pub ai_providers: BTreeSet<AiProvider>,
    #[serde(default)]
    pub ai_features: BTreeSet<AiFeature>,
    #[serde(default)]
    pub include_payments: bool,
    #[serde(default, rename = "isPWA")]
    pub is_pwa: bool,
    #[serde(default)]
    pub extra_packages: BTreeSet<ExtraPackage>,
}

impl Answers {
    /// Answers with the required fields set and every option off
    pub fn new(
        project_name: impl Into<String>,
        framework: Framework,
        template: Template,
        css_framework: CssFramework,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            framework,
            template,
            css_framework,
            firebase_services: BTreeSet::new(),
            component_library_components: BTreeSet::new(),
            ai_providers: BTreeSet::new(),
            ai_features: BTreeSet::new(),
            include_payments: false,
            is_pwa: false,
            extra_packages: BTreeSet::new(),
        }
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load raw answers from a YAML answer file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
        Self::from_yaml_str(&content).map_err(|e| ScaffoldError::AnswerFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate and normalise into the immutable answer set.
    ///
    /// Options that only make sense for some templates or CSS frameworks are
    /// cleared when they do not apply.
    pub fn finalize(self) -> Result<AnswerSet> {
        let project_name = validate_project_name(&self.project_name)?;
        let ai_template = self.template == Template::AiSaas;

        Ok(AnswerSet {
            project_name,
            framework: self.framework,
            template: self.template,
            css_framework: self.css_framework,
            firebase_services: self.firebase_services,
            component_library_components: if self.css_framework.has_component_library() {
                self.component_library_components
                    .into_iter()
                    .map(|c| c.trim().to_ascii_lowercase())
                    .filter(|c| !c.is_empty())
                    .collect()
            } else {
                BTreeSet::new()
            },
            ai_providers: if ai_template {
                self.ai_providers
            } else {
                BTreeSet::new()
            },
            ai_features: if ai_template {
                self.ai_features
            } else {
                BTreeSet::new()
            },
            include_payments: self.include_payments && self.template.supports_payments(),
            is_pwa: self.is_pwa,
            extra_packages: self.extra_packages,
        })
    }
}

/// Check a project name is usable as a single directory name
pub fn validate_project_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let invalid = |reason| Err(ScaffoldError::InvalidProjectName(name.to_string(), reason));

    if trimmed.is_empty() {
        return invalid("name cannot be empty");
    }
    if trimmed == "." || trimmed == ".." {
        return invalid("name cannot be a relative directory");
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return invalid("name cannot contain path separators");
    }
    if trimmed.starts_with('-') {
        return invalid("name cannot start with '-'");
    }
    if trimmed.chars().any(char::is_control) {
        return invalid("name cannot contain control characters");
    }

    Ok(trimmed.to_string())
}

/// The finalized, read-only answer set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    project_name: String,
    framework: Framework,
    template: Template,
    css_framework: CssFramework,
    firebase_services: BTreeSet<FirebaseService>,
    component_library_components: BTreeSet<String>,
    ai_providers: BTreeSet<AiProvider>,
    ai_features: BTreeSet<AiFeature>,
    include_payments: bool,
    is_pwa: bool,
    extra_packages: BTreeSet<ExtraPackage>,
}

impl AnswerSet {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn layout(&self) -> Layout {
        Layout::for_framework(self.framework)
    }

    pub fn template(&self) -> Template {
        self.template
    }

    pub fn css_framework(&self) -> CssFramework {
        self.css_framework
    }

    pub fn firebase_services(&self) -> &BTreeSet<FirebaseService> {
        &self.firebase_services
    }

    pub fn has_firebase(&self, service: FirebaseService) -> bool {
        self.firebase_services.contains(&service)
    }

    pub fn component_library_components(&self) -> &BTreeSet<String> {
        &self.component_library_components
    }

    pub fn uses_component_library(&self) -> bool {
        self.css_framework.has_component_library()
    }

    pub fn ai_providers(&self) -> &BTreeSet<AiProvider> {
        &self.ai_providers
    }

    pub fn ai_features(&self) -> &BTreeSet<AiFeature> {
        &self.ai_features
    }

    pub fn include_payments(&self) -> bool {
        self.include_payments
    }

    pub fn is_pwa(&self) -> bool {
        self.is_pwa
    }

    pub fn extra_packages(&self) -> &BTreeSet<ExtraPackage> {
        &self.extra_packages
    }

    pub fn has_package(&self, package: ExtraPackage) -> bool {
        self.extra_packages.contains(&package)
    }
}
