//! Closed sets of choices offered by the prompts
//!
//! Every choice has a stable id (used in answer files and `FromStr`), a
//! human-readable label and an optional hint shown next to it in selects.

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A closed set of identifiers the user can pick from
pub trait Choice: Sized + Copy + 'static {
    /// Name of the set, used in error messages ("template", "CSS framework")
    const KIND: &'static str;

    /// Every variant, in prompt order
    const ALL: &'static [Self];

    fn id(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn hint(&self) -> &'static str {
        ""
    }

    /// Extra ids accepted when parsing
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Parse a choice by id or alias (case-insensitive). Unknown ids are rejected.
pub fn parse_choice<T: Choice>(value: &str) -> Result<T> {
    let wanted = value.trim().to_ascii_lowercase();
    T::ALL
        .iter()
        .copied()
        .find(|c| c.id() == wanted || c.aliases().contains(&wanted.as_str()))
        .ok_or_else(|| ScaffoldError::UnknownChoice {
            kind: T::KIND,
            value: value.to_string(),
            expected: T::ALL.iter().map(|c| c.id()).collect::<Vec<_>>().join(", "),
        })
}

macro_rules! choice_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ScaffoldError;

                fn from_str(s: &str) -> Result<Self> {
                    parse_choice(s)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ScaffoldError;

                fn try_from(value: String) -> Result<Self> {
                    parse_choice(&value)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

choice_conversions!(
    Framework,
    Template,
    CssFramework,
    FirebaseService,
    AiProvider,
    AiFeature,
    ExtraPackage,
);

/// Base scaffold tool and file layout conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Framework {
    Vite,
    Next,
}

impl Choice for Framework {
    const KIND: &'static str = "framework";
    const ALL: &'static [Self] = &[Framework::Vite, Framework::Next];

    fn id(&self) -> &'static str {
        match self {
            Framework::Vite => "vite",
            Framework::Next => "next",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Framework::Vite => "Vite + React",
            Framework::Next => "Next.js (App Router)",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Framework::Vite => "client-side SPA with React Router",
            Framework::Next => "file-based routing, server components",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Framework::Vite => &["react", "vite-react"],
            Framework::Next => &["nextjs", "next.js", "nextlike"],
        }
    }
}

/// Feature template applied on top of the base scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Template {
    Basic,
    Dashboard,
    Blog,
    Ecommerce,
    Landing,
    AiSaas,
    Social,
    ProjectMgmt,
    Learning,
}

impl Template {
    /// Templates that may offer a payments integration
    pub fn supports_payments(&self) -> bool {
        matches!(
            self,
            Template::AiSaas | Template::Ecommerce | Template::Learning
        )
    }
}

impl Choice for Template {
    const KIND: &'static str = "template";
    const ALL: &'static [Self] = &[
        Template::Basic,
        Template::Dashboard,
        Template::Blog,
        Template::Ecommerce,
        Template::Landing,
        Template::AiSaas,
        Template::Social,
        Template::ProjectMgmt,
        Template::Learning,
    ];

    fn id(&self) -> &'static str {
        match self {
            Template::Basic => "basic",
            Template::Dashboard => "dashboard",
            Template::Blog => "blog",
            Template::Ecommerce => "ecommerce",
            Template::Landing => "landing",
            Template::AiSaas => "ai-saas",
            Template::Social => "social",
            Template::ProjectMgmt => "project-mgmt",
            Template::Learning => "learning",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Template::Basic => "Basic",
            Template::Dashboard => "Admin Dashboard",
            Template::Blog => "Blog",
            Template::Ecommerce => "E-commerce Store",
            Template::Landing => "Landing Page",
            Template::AiSaas => "AI SaaS",
            Template::Social => "Social Feed",
            Template::ProjectMgmt => "Project Management",
            Template::Learning => "Learning Platform",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Template::Basic => "welcome page and router",
            Template::Dashboard => "sidebar layout, stats cards, activity feed",
            Template::Blog => "post list, search, categories sidebar",
            Template::Ecommerce => "product grid, filters, cart",
            Template::Landing => "hero, features, newsletter, footer",
            Template::AiSaas => "AI studio, generation history, credits",
            Template::Social => "post composer, feed, likes",
            Template::ProjectMgmt => "kanban board with task columns",
            Template::Learning => "course catalog with progress tracking",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Template::AiSaas => &["ai_saas", "aisaas"],
            Template::ProjectMgmt => &["project_mgmt", "project-management", "kanban"],
            Template::Landing => &["landing-page"],
            _ => &[],
        }
    }
}

/// CSS framework (optionally with a component library)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum CssFramework {
    Tailwind,
    TailwindShadcn,
    BootstrapCdn,
    ReactBootstrap,
    Mui,
}

impl CssFramework {
    pub fn is_tailwind(&self) -> bool {
        matches!(self, CssFramework::Tailwind | CssFramework::TailwindShadcn)
    }

    /// Whether UI elements render through the installed component library
    pub fn has_component_library(&self) -> bool {
        matches!(self, CssFramework::TailwindShadcn)
    }

    /// Whether the scaffold's global stylesheet survives cleanup
    pub fn needs_global_stylesheet(&self) -> bool {
        self.is_tailwind()
    }
}

impl Choice for CssFramework {
    const KIND: &'static str = "CSS framework";
    const ALL: &'static [Self] = &[
        CssFramework::Tailwind,
        CssFramework::TailwindShadcn,
        CssFramework::BootstrapCdn,
        CssFramework::ReactBootstrap,
        CssFramework::Mui,
    ];

    fn id(&self) -> &'static str {
        match self {
            CssFramework::Tailwind => "tailwind",
            CssFramework::TailwindShadcn => "tailwind-shadcn",
            CssFramework::BootstrapCdn => "bootstrap-cdn",
            CssFramework::ReactBootstrap => "bootstrap",
            CssFramework::Mui => "mui",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CssFramework::Tailwind => "Tailwind CSS",
            CssFramework::TailwindShadcn => "Tailwind CSS + shadcn/ui",
            CssFramework::BootstrapCdn => "Bootstrap (CDN)",
            CssFramework::ReactBootstrap => "React Bootstrap",
            CssFramework::Mui => "Material UI",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            CssFramework::Tailwind => "utility-first classes",
            CssFramework::TailwindShadcn => "Tailwind plus accessible component primitives",
            CssFramework::BootstrapCdn => "stylesheet link, nothing installed",
            CssFramework::ReactBootstrap => "bootstrap package and React components",
            CssFramework::Mui => "Material Design components with Emotion",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            CssFramework::TailwindShadcn => &["tailwind+component-library", "shadcn"],
            CssFramework::ReactBootstrap => &["bootstrap-package", "react-bootstrap"],
            CssFramework::Mui => &["mui-like", "material-ui"],
            _ => &[],
        }
    }
}

/// Independently toggleable Firebase sub-service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum FirebaseService {
    Auth,
    Database,
    Storage,
}

impl Choice for FirebaseService {
    const KIND: &'static str = "Firebase service";
    const ALL: &'static [Self] = &[
        FirebaseService::Auth,
        FirebaseService::Database,
        FirebaseService::Storage,
    ];

    fn id(&self) -> &'static str {
        match self {
            FirebaseService::Auth => "auth",
            FirebaseService::Database => "database",
            FirebaseService::Storage => "storage",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FirebaseService::Auth => "Authentication",
            FirebaseService::Database => "Firestore Database",
            FirebaseService::Storage => "Cloud Storage",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            FirebaseService::Auth => "email/password and Google sign-in",
            FirebaseService::Database => "realtime document hooks and CRUD helpers",
            FirebaseService::Storage => "file upload, listing and deletion",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            FirebaseService::Database => &["firestore", "db"],
            _ => &[],
        }
    }
}

/// AI model provider wired into the AI SaaS template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    Gemini,
}

impl AiProvider {
    /// Server-side secret read by the edge function
    pub fn env_key(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "OPENAI_API_KEY",
            AiProvider::Anthropic => "ANTHROPIC_API_KEY",
            AiProvider::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "gpt-4o-mini",
            AiProvider::Anthropic => "claude-3-5-haiku-latest",
            AiProvider::Gemini => "gemini-1.5-flash",
        }
    }

    pub fn docs_url(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "https://platform.openai.com/docs",
            AiProvider::Anthropic => "https://docs.anthropic.com",
            AiProvider::Gemini => "https://ai.google.dev/docs",
        }
    }
}

impl Choice for AiProvider {
    const KIND: &'static str = "AI provider";
    const ALL: &'static [Self] = &[AiProvider::OpenAi, AiProvider::Anthropic, AiProvider::Gemini];

    fn id(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Gemini => "gemini",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "OpenAI",
            AiProvider::Anthropic => "Anthropic",
            AiProvider::Gemini => "Google Gemini",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            AiProvider::Gemini => &["google"],
            AiProvider::Anthropic => &["claude"],
            _ => &[],
        }
    }
}

/// Descriptive AI feature; only changes labels in generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum AiFeature {
    Chat,
    TextGeneration,
    ImageGeneration,
    Summarization,
    CodeAssistant,
}

impl Choice for AiFeature {
    const KIND: &'static str = "AI feature";
    const ALL: &'static [Self] = &[
        AiFeature::Chat,
        AiFeature::TextGeneration,
        AiFeature::ImageGeneration,
        AiFeature::Summarization,
        AiFeature::CodeAssistant,
    ];

    fn id(&self) -> &'static str {
        match self {
            AiFeature::Chat => "chat",
            AiFeature::TextGeneration => "text-generation",
            AiFeature::ImageGeneration => "image-generation",
            AiFeature::Summarization => "summarization",
            AiFeature::CodeAssistant => "code-assistant",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AiFeature::Chat => "AI Chat",
            AiFeature::TextGeneration => "Text Generation",
            AiFeature::ImageGeneration => "Image Generation",
            AiFeature::Summarization => "Summarization",
            AiFeature::CodeAssistant => "Code Assistant",
        }
    }
}

/// Optional npm package installed alongside the scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum ExtraPackage {
    Axios,
    ReactIcons,
    ReactHookForm,
    Yup,
    Formik,
    Moment,
    Zustand,
}

impl ExtraPackage {
    pub fn npm_name(&self) -> &'static str {
        self.id()
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExtraPackage::Axios => "HTTP client for API requests",
            ExtraPackage::ReactIcons => "Popular icon library",
            ExtraPackage::ReactHookForm => "Performant forms library",
            ExtraPackage::Yup => "Schema validation library",
            ExtraPackage::Formik => "Form management library",
            ExtraPackage::Moment => "Date manipulation library",
            ExtraPackage::Zustand => "Minimal global state management",
        }
    }
}

impl Choice for ExtraPackage {
    const KIND: &'static str = "package";
    const ALL: &'static [Self] = &[
        ExtraPackage::Axios,
        ExtraPackage::ReactIcons,
        ExtraPackage::ReactHookForm,
        ExtraPackage::Yup,
        ExtraPackage::Formik,
        ExtraPackage::Moment,
        ExtraPackage::Zustand,
    ];

    fn id(&self) -> &'static str {
        match self {
            ExtraPackage::Axios => "axios",
            ExtraPackage::ReactIcons => "react-icons",
            ExtraPackage::ReactHookForm => "react-hook-form",
            ExtraPackage::Yup => "yup",
            ExtraPackage::Formik => "formik",
            ExtraPackage::Moment => "moment",
            ExtraPackage::Zustand => "zustand",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExtraPackage::Axios => "Axios",
            ExtraPackage::ReactIcons => "React Icons",
            ExtraPackage::ReactHookForm => "React Hook Form",
            ExtraPackage::Yup => "Yup",
            ExtraPackage::Formik => "Formik",
            ExtraPackage::Moment => "Moment.js",
            ExtraPackage::Zustand => "Zustand",
        }
    }

    fn hint(&self) -> &'static str {
        self.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_id_and_alias() {
        assert_eq!(parse_choice::<Template>("ai-saas").unwrap(), Template::AiSaas);
        assert_eq!(parse_choice::<Template>("Kanban").unwrap(), Template::ProjectMgmt);
        assert_eq!(
            "tailwind+component-library".parse::<CssFramework>().unwrap(),
            CssFramework::TailwindShadcn
        );
        assert_eq!("nextlike".parse::<Framework>().unwrap(), Framework::Next);
        assert_eq!("firestore".parse::<FirebaseService>().unwrap(), FirebaseService::Database);
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let err = parse_choice::<Template>("portfolio").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown template 'portfolio'"));
        assert!(message.contains("dashboard"));
    }

    #[test]
    fn test_ids_round_trip() {
        for template in Template::ALL {
            assert_eq!(parse_choice::<Template>(template.id()).unwrap(), *template);
        }
        for css in CssFramework::ALL {
            assert_eq!(parse_choice::<CssFramework>(css.id()).unwrap(), *css);
        }
    }

    #[test]
    fn test_payment_eligible_templates() {
        let eligible: Vec<_> = Template::ALL
            .iter()
            .filter(|t| t.supports_payments())
            .collect();
        assert_eq!(
            eligible,
            vec![&Template::Ecommerce, &Template::AiSaas, &Template::Learning]
        );
    }
}
