//! File layout conventions of each base framework

use crate::answers::Framework;
use crate::runtime::Invocation;

/// Where a framework keeps its entry point, root component, stylesheets and pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    framework: Framework,
}

impl Layout {
    pub fn for_framework(framework: Framework) -> Self {
        Self { framework }
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn is_next(&self) -> bool {
        self.framework == Framework::Next
    }

    /// Command that materializes the base project in `<cwd>/<project_name>`.
    /// Every option is passed up front so the tool never stops to ask.
    pub fn create_command(&self, project_name: &str) -> Invocation {
        let invocation = match self.framework {
            Framework::Vite => Invocation::new(
                "npm",
                [
                    "create",
                    "vite@latest",
                    project_name,
                    "--",
                    "--template",
                    "react",
                    "--no-interactive",
                ],
            ),
            Framework::Next => Invocation::new(
                "npx",
                [
                    "create-next-app@latest",
                    project_name,
                    "--js",
                    "--eslint",
                    "--app",
                    "--src-dir",
                    "--no-tailwind",
                    "--import-alias",
                    "@/*",
                    "--use-npm",
                    "--yes",
                ],
            ),
        };
        invocation.interactive()
    }

    /// Entry point candidates; the first existing one wins
    pub fn entry_candidates(&self) -> &'static [&'static str] {
        match self.framework {
            Framework::Vite => &["src/main.jsx", "src/main.tsx"],
            Framework::Next => &["src/app/layout.js", "src/app/layout.tsx", "src/app/layout.jsx"],
        }
    }

    /// Root component candidates; the first existing one wins
    pub fn root_component_candidates(&self) -> &'static [&'static str] {
        match self.framework {
            Framework::Vite => &["src/App.jsx", "src/App.tsx"],
            Framework::Next => &["src/app/page.js", "src/app/page.tsx", "src/app/page.jsx"],
        }
    }

    pub fn bundler_config_candidates(&self) -> &'static [&'static str] {
        match self.framework {
            Framework::Vite => &["vite.config.js", "vite.config.ts"],
            Framework::Next => &["postcss.config.mjs"],
        }
    }

    pub fn global_stylesheet(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "src/index.css",
            Framework::Next => "src/app/globals.css",
        }
    }

    /// Import specifier of the global stylesheet as seen from the entry point
    pub fn global_stylesheet_specifier(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "./index.css",
            Framework::Next => "./globals.css",
        }
    }

    pub fn default_stylesheet(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "src/App.css",
            Framework::Next => "src/app/page.module.css",
        }
    }

    /// Import specifier of the default stylesheet as seen from the root component
    pub fn default_stylesheet_specifier(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "./App.css",
            Framework::Next => "./page.module.css",
        }
    }

    pub fn pages_dir(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "src/pages",
            Framework::Next => "src/views",
        }
    }

    pub fn page_file(&self, component: &str) -> String {
        format!("{}/{}.jsx", self.pages_dir(), component)
    }

    /// Import path of a page module as seen from the root component
    pub fn page_import(&self, component: &str) -> String {
        match self.framework {
            Framework::Vite => format!("./pages/{}", component),
            Framework::Next => format!("../views/{}", component),
        }
    }

    /// Relative path from the root component's directory to `src/`
    pub fn root_to_src(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "./",
            Framework::Next => "../",
        }
    }

    /// Directories created before any writer runs
    pub fn folders(&self) -> Vec<&'static str> {
        vec![
            "src/components",
            self.pages_dir(),
            "src/hooks",
            "src/store",
            "src/utils",
            "src/assets",
        ]
    }

    pub fn env_prefix(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "VITE_",
            Framework::Next => "NEXT_PUBLIC_",
        }
    }

    /// Name of a client-visible environment variable
    pub fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.env_prefix(), key)
    }

    /// Expression that reads a client-visible environment variable in generated code
    pub fn env_access(&self, key: &str) -> String {
        match self.framework {
            Framework::Vite => format!("import.meta.env.{}", self.env_key(key)),
            Framework::Next => format!("process.env.{}", self.env_key(key)),
        }
    }

    /// Directive required at the top of files that use hooks or browser APIs
    pub fn client_directive(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "",
            Framework::Next => "'use client';\n\n",
        }
    }

    pub fn dev_url(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "http://localhost:5173",
            Framework::Next => "http://localhost:3000",
        }
    }

    pub fn build_output_dir(&self) -> &'static str {
        match self.framework {
            Framework::Vite => "dist",
            Framework::Next => "out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_access_per_framework() {
        let vite = Layout::for_framework(Framework::Vite);
        let next = Layout::for_framework(Framework::Next);

        assert_eq!(vite.env_access("API_URL"), "import.meta.env.VITE_API_URL");
        assert_eq!(next.env_access("API_URL"), "process.env.NEXT_PUBLIC_API_URL");
    }

    #[test]
    fn test_next_pages_avoid_pages_router() {
        let next = Layout::for_framework(Framework::Next);
        assert_eq!(next.page_file("Blog"), "src/views/Blog.jsx");
        assert_eq!(next.page_import("Blog"), "../views/Blog");
        assert!(!next.folders().contains(&"src/pages"));
    }

    #[test]
    fn test_create_command_contains_project_name() {
        let vite = Layout::for_framework(Framework::Vite);
        let cmd = vite.create_command("my app");
        assert_eq!(cmd.program(), "npm");
        assert!(cmd.args().iter().any(|a| a == "my app"));
    }

    #[test]
    fn test_create_command_never_prompts() {
        let vite = Layout::for_framework(Framework::Vite).create_command("demo");
        assert_eq!(
            vite.to_string(),
            "npm create vite@latest demo -- --template react --no-interactive"
        );
        assert!(vite.is_interactive());

        let next = Layout::for_framework(Framework::Next).create_command("demo");
        assert_eq!(next.program(), "npx");
        assert_eq!(next.args().last().map(String::as_str), Some("--yes"));
        assert!(next.args().iter().any(|a| a == "--no-tailwind"));
        assert!(next.is_interactive());
    }
}
