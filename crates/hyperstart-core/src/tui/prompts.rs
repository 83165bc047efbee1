//! Charm-style CLI prompts using cliclack

use crate::answers::{
    validate_project_name, AiFeature, AiProvider, AnswerSet, Answers, Choice, CssFramework,
    ExtraPackage, FirebaseService, Framework, Template,
};
use crate::project::DiskSink;
use crate::runtime::{check_toolchain, ProcessRunner, MIN_NODE_MAJOR};
use crate::scaffold::{self, ScaffoldEvent, ScaffoldReport};
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// YAML answer file; skips the prompts when set
    pub answers: Option<PathBuf>,

    /// Parent directory the project is created in
    pub directory: Option<PathBuf>,

    /// Auto-confirm the final prompt (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Hyperstart")?;

    // Step 1: Node.js and npm must be present
    handle_toolchain_check()?;

    // Step 2: Collect answers
    let answers = match &args.answers {
        Some(path) => {
            let answers = Answers::from_file(path)?.finalize()?;
            cliclack::log::info(format!("Using answers from {}", path.display()))?;
            answers
        }
        None => collect_answers()?,
    };

    // Step 3: Resolve where the project goes
    let base_dir = select_base_dir(&args)?;

    // Step 4: Confirm
    cliclack::note("Summary", summary(&answers))?;
    let confirm = if args.yes {
        true
    } else {
        cliclack::confirm("Create the project?")
            .initial_value(true)
            .interact()?
    };
    if !confirm {
        cliclack::outro_cancel("Setup cancelled.")?;
        return Ok(());
    }

    // Step 5: Scaffold
    let mut runner = ProcessRunner::new();
    let report = scaffold::run(&answers, &base_dir, DiskSink, &mut runner, narrate).await?;

    // Step 6: Show next steps
    print_next_steps(&answers, &report)?;

    Ok(())
}

fn handle_toolchain_check() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking Node.js and npm...");

    match check_toolchain() {
        Ok(toolchain) => {
            spinner.stop(format!(
                "Detected runtimes: Node.js ({}), npm ({})",
                toolchain.node.version.as_deref().unwrap_or("unknown"),
                toolchain.npm.version.as_deref().unwrap_or("unknown"),
            ));
            if toolchain.node_outdated() {
                cliclack::log::warning(format!(
                    "Node.js {} or newer is recommended; the base scaffold may fail on older versions",
                    MIN_NODE_MAJOR
                ))?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing runtimes and try again.");
        }
    }
}

fn collect_answers() -> Result<AnswerSet> {
    let project_name: String = cliclack::input("Project name")
        .placeholder("my-app")
        .validate(|input: &String| validate_project_name(input).map(|_| ()))
        .interact()?;

    let framework: Framework = select_choice("Which framework?")?;
    let css_framework: CssFramework = select_choice("Which CSS framework?")?;
    let template: Template = select_choice("Which template?")?;

    let mut answers = Answers::new(project_name, framework, template, css_framework);

    answers.firebase_services = multiselect_choice("Firebase services (optional)")?;

    if css_framework.has_component_library() {
        let input: String = cliclack::input("Extra shadcn/ui components (comma-separated, optional)")
            .placeholder("dialog, tabs")
            .required(false)
            .interact()?;
        answers.component_library_components = input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
    }

    if template == Template::AiSaas {
        answers.ai_providers = multiselect_choice::<AiProvider>("AI providers")?;
        answers.ai_features = multiselect_choice::<AiFeature>("AI features")?;
    }

    if template.supports_payments() {
        answers.include_payments = cliclack::confirm("Include Stripe payments?")
            .initial_value(false)
            .interact()?;
    }

    answers.is_pwa = cliclack::confirm("Make it a Progressive Web App?")
        .initial_value(false)
        .interact()?;

    answers.extra_packages = multiselect_choice::<ExtraPackage>("Extra packages (optional)")?;

    Ok(answers.finalize()?)
}

fn select_choice<T: Choice + Eq>(prompt: &str) -> Result<T> {
    let mut select = cliclack::select(prompt);
    for choice in T::ALL {
        select = select.item(*choice, choice.label(), choice.hint());
    }
    Ok(select.interact()?)
}

fn multiselect_choice<T: Choice + Eq + Ord>(prompt: &str) -> Result<BTreeSet<T>> {
    let mut multi = cliclack::multiselect(prompt);
    for choice in T::ALL {
        multi = multi.item(*choice, choice.label(), choice.hint());
    }
    let selected: Vec<T> = multi.required(false).interact()?;
    Ok(selected.into_iter().collect())
}

fn select_base_dir(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }
    if args.directory.is_some() {
        cliclack::log::info(format!("Using directory: {}", path.display()))?;
    }

    Ok(path)
}

fn summary(answers: &AnswerSet) -> String {
    let mut lines = vec![
        format!("Project:   {}", answers.project_name()),
        format!("Framework: {}", answers.framework()),
        format!("Template:  {}", answers.template()),
        format!("CSS:       {}", answers.css_framework()),
    ];
    if !answers.firebase_services().is_empty() {
        lines.push(format!("Firebase:  {}", labels(answers.firebase_services())));
    }
    if !answers.ai_providers().is_empty() {
        lines.push(format!("AI:        {}", labels(answers.ai_providers())));
    }
    if answers.include_payments() {
        lines.push("Payments:  Stripe".to_string());
    }
    if answers.is_pwa() {
        lines.push("PWA:       yes".to_string());
    }
    if !answers.extra_packages().is_empty() {
        lines.push(format!("Packages:  {}", labels(answers.extra_packages())));
    }
    lines.join("\n")
}

fn labels<T: Choice>(set: &BTreeSet<T>) -> String {
    set.iter().map(|c| c.label()).collect::<Vec<_>>().join(", ")
}

/// Print scaffold progress; a failed terminal write is not worth aborting over
fn narrate(event: ScaffoldEvent) {
    let _ = match event {
        ScaffoldEvent::Started(step) => cliclack::log::step(step.title()),
        ScaffoldEvent::Skipped(_) => Ok(()),
        ScaffoldEvent::Finished { step, changes } if changes > 0 => {
            cliclack::log::success(format!("{} ({} file changes)", step.title(), changes))
        }
        ScaffoldEvent::Finished { step, .. } => cliclack::log::success(step.title()),
        ScaffoldEvent::ComponentsDelegated(names) => cliclack::log::info(format!(
            "Installing components with the shadcn CLI: {}",
            names.join(", ")
        )),
        ScaffoldEvent::PageWritten(path) => cliclack::log::info(format!("Wrote {}", path)),
    };
}

/// Commands the user runs after a successful scaffold
pub fn next_steps(answers: &AnswerSet, root: &Path) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(root) {
        steps.push(format!("cd {}", root.display()));
    }

    let needs_env = !answers.firebase_services().is_empty()
        || !answers.ai_providers().is_empty()
        || answers.include_payments()
        || answers.has_package(ExtraPackage::Axios);
    if needs_env {
        steps.push("cp .env.example .env  (then fill in your keys)".to_string());
    }

    if answers.has_firebase(FirebaseService::Auth) {
        steps.push("Enable a sign-in provider in the Firebase console".to_string());
    }

    steps.push(format!(
        "npm run dev  (opens {})",
        answers.layout().dev_url()
    ));

    steps
}

fn print_next_steps(answers: &AnswerSet, report: &ScaffoldReport) -> Result<()> {
    let steps = next_steps(answers, &report.root);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!(
        "Created {} in {}. Happy coding!",
        answers.project_name(),
        report.root.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(template: Template) -> Answers {
        Answers::new("demo", Framework::Vite, template, CssFramework::Tailwind)
    }

    #[test]
    fn test_next_steps_minimal() {
        let set = answers(Template::Basic).finalize().unwrap();
        let steps = next_steps(&set, Path::new("/nowhere/demo"));

        assert_eq!(steps[0], "cd /nowhere/demo");
        assert!(steps.last().unwrap().contains("http://localhost:5173"));
        assert!(!steps.iter().any(|s| s.contains(".env")));
    }

    #[test]
    fn test_next_steps_with_services() {
        let mut raw = answers(Template::AiSaas);
        raw.ai_providers.insert(AiProvider::OpenAi);
        raw.firebase_services.insert(FirebaseService::Auth);
        let steps = next_steps(&raw.finalize().unwrap(), Path::new("/nowhere/demo"));

        assert!(steps.iter().any(|s| s.starts_with("cp .env.example .env")));
        assert!(steps.iter().any(|s| s.contains("Firebase console")));
    }

    #[test]
    fn test_summary_lists_selected_options() {
        let mut raw = answers(Template::Ecommerce);
        raw.include_payments = true;
        raw.extra_packages.insert(ExtraPackage::Axios);
        let text = summary(&raw.finalize().unwrap());

        assert!(text.contains("Project:   demo"));
        assert!(text.contains("Payments:  Stripe"));
        assert!(!text.contains("Firebase"));
        assert!(!text.contains("PWA"));
    }
}
