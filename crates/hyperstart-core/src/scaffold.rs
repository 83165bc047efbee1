//! End-to-end orchestration
//!
//! Steps always run in the same order: base scaffold, CSS, dependencies,
//! folders, service installers, template composition, cleanup, the basic
//! template's regeneration and finally the README. Later steps rely on files
//! written by earlier ones, so nothing here is reordered or run concurrently.
//! Progress is reported through `ScaffoldEvent`s; printing them is the
//! caller's business.

use crate::answers::{AnswerSet, ExtraPackage, Template};
use crate::cleanup;
use crate::css::{self, ComponentInstall};
use crate::error::{Result, ScaffoldError};
use crate::project::{FileChange, FileSink, Project};
use crate::readme;
use crate::runtime::{CommandRunner, Invocation};
use crate::services::{self, AiOptions};
use crate::templates::{self, basic, ui::Ui};
use std::fmt;
use std::path::{Path, PathBuf};

/// One step of a scaffold run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    BaseScaffold,
    Css,
    Dependencies,
    Folders,
    Firebase,
    Ai,
    Payments,
    Pwa,
    PackageModules,
    Template,
    Cleanup,
    BasicTemplate,
    Readme,
}

impl Step {
    pub const ALL: [Step; 13] = [
        Step::BaseScaffold,
        Step::Css,
        Step::Dependencies,
        Step::Folders,
        Step::Firebase,
        Step::Ai,
        Step::Payments,
        Step::Pwa,
        Step::PackageModules,
        Step::Template,
        Step::Cleanup,
        Step::BasicTemplate,
        Step::Readme,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Step::BaseScaffold => "Creating base project",
            Step::Css => "Setting up CSS framework",
            Step::Dependencies => "Installing dependencies",
            Step::Folders => "Creating folder structure",
            Step::Firebase => "Setting up Firebase",
            Step::Ai => "Setting up AI backend",
            Step::Payments => "Setting up payments",
            Step::Pwa => "Configuring PWA",
            Step::PackageModules => "Writing package modules",
            Step::Template => "Applying template",
            Step::Cleanup => "Cleaning up boilerplate",
            Step::BasicTemplate => "Writing welcome page",
            Step::Readme => "Writing README",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Progress notifications emitted while scaffolding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    Started(Step),
    /// The step does not apply to this answer set
    Skipped(Step),
    /// The step ran; `changes` counts the file changes it made
    Finished { step: Step, changes: usize },
    /// Component names handed to the component CLI rather than written directly
    ComponentsDelegated(Vec<String>),
    /// A template page was written
    PageWritten(String),
}

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub changes: Vec<FileChange>,
    pub commands: Vec<String>,
    pub components: Option<ComponentInstall>,
}

/// Runner that remembers every command line it was asked to run
struct Tracked<'a, R> {
    inner: &'a mut R,
    commands: Vec<String>,
}

impl<R: CommandRunner> CommandRunner for Tracked<'_, R> {
    async fn run(&mut self, invocation: &Invocation) -> Result<()> {
        self.commands.push(invocation.to_string());
        self.inner.run(invocation).await
    }
}

/// Create `<base_dir>/<projectName>` and run every step against it
pub async fn run<S, R, F>(
    answers: &AnswerSet,
    base_dir: &Path,
    sink: S,
    runner: &mut R,
    mut reporter: F,
) -> Result<ScaffoldReport>
where
    S: FileSink,
    R: CommandRunner,
    F: FnMut(ScaffoldEvent),
{
    let layout = answers.layout();
    let root = base_dir.join(answers.project_name());
    if sink.exists(&root) {
        return Err(ScaffoldError::DirectoryExists(root));
    }

    let mut tracked = Tracked {
        inner: runner,
        commands: Vec::new(),
    };

    reporter(ScaffoldEvent::Started(Step::BaseScaffold));
    tracked
        .run(&layout.create_command(answers.project_name()).in_dir(base_dir))
        .await?;
    reporter(ScaffoldEvent::Finished {
        step: Step::BaseScaffold,
        changes: 0,
    });

    let mut project = Project::new(root.clone(), layout, sink);
    let components = configure(&mut project, &mut tracked, answers, &mut reporter).await?;

    let (_, changes) = project.into_parts();
    Ok(ScaffoldReport {
        root,
        changes,
        commands: tracked.commands,
        components,
    })
}

/// Every step after the base scaffold, against an existing project root
pub async fn configure<S, R, F>(
    project: &mut Project<S>,
    runner: &mut R,
    answers: &AnswerSet,
    reporter: &mut F,
) -> Result<Option<ComponentInstall>>
where
    S: FileSink,
    R: CommandRunner,
    F: FnMut(ScaffoldEvent),
{
    let layout = project.layout();
    let ui = Ui::new(answers);
    let mut step = Stepper { reporter, mark: 0 };

    step.start(project, Step::Css);
    let components = css::install(project, runner, answers).await?;
    if let Some(delegated) = components.as_ref().map(|c| &c.delegated).filter(|d| !d.is_empty()) {
        (step.reporter)(ScaffoldEvent::ComponentsDelegated(delegated.clone()));
    }
    step.finish(project, Step::Css);

    if services::packages::dependencies(layout, answers.extra_packages()).is_empty() {
        step.skip(Step::Dependencies);
    } else {
        step.start(project, Step::Dependencies);
        services::packages::install(project, runner, answers.extra_packages()).await?;
        step.finish(project, Step::Dependencies);
    }

    step.start(project, Step::Folders);
    for folder in layout.folders() {
        project.create_dir(folder)?;
    }
    step.finish(project, Step::Folders);

    if answers.firebase_services().is_empty() {
        step.skip(Step::Firebase);
    } else {
        step.start(project, Step::Firebase);
        services::firebase::install(project, runner, answers.firebase_services(), &ui).await?;
        step.finish(project, Step::Firebase);
    }

    if answers.ai_providers().is_empty() {
        step.skip(Step::Ai);
    } else {
        step.start(project, Step::Ai);
        let options = AiOptions {
            features: answers.ai_features().clone(),
            payments: answers.include_payments(),
        };
        services::ai::install(project, runner, answers.ai_providers(), &options).await?;
        step.finish(project, Step::Ai);
    }

    if answers.include_payments() {
        step.start(project, Step::Payments);
        services::payments::install(project, runner, true).await?;
        step.finish(project, Step::Payments);
    } else {
        step.skip(Step::Payments);
    }

    if answers.is_pwa() {
        step.start(project, Step::Pwa);
        services::pwa::install(project, runner, answers.project_name(), true).await?;
        step.finish(project, Step::Pwa);
    } else {
        step.skip(Step::Pwa);
    }

    if answers.has_package(ExtraPackage::Axios) || answers.has_package(ExtraPackage::Zustand) {
        step.start(project, Step::PackageModules);
        services::packages::write_modules(project, answers.extra_packages())?;
        step.finish(project, Step::PackageModules);
    } else {
        step.skip(Step::PackageModules);
    }

    if answers.template() == Template::Basic {
        step.skip(Step::Template);
    } else {
        step.start(project, Step::Template);
        if let Some(page) = templates::compose(project, answers)? {
            (step.reporter)(ScaffoldEvent::PageWritten(layout.page_file(page.component)));
        }
        step.finish(project, Step::Template);
    }

    step.start(project, Step::Cleanup);
    cleanup::run(project, answers.css_framework())?;
    step.finish(project, Step::Cleanup);

    if answers.template() == Template::Basic {
        step.start(project, Step::BasicTemplate);
        basic::regenerate(project, answers)?;
        step.finish(project, Step::BasicTemplate);
    } else {
        step.skip(Step::BasicTemplate);
    }

    step.start(project, Step::Readme);
    readme::write(project, answers)?;
    step.finish(project, Step::Readme);

    Ok(components)
}

/// Emits step events and counts the changes each step made
struct Stepper<'a, F> {
    reporter: &'a mut F,
    mark: usize,
}

impl<F: FnMut(ScaffoldEvent)> Stepper<'_, F> {
    fn start<S: FileSink>(&mut self, project: &Project<S>, step: Step) {
        self.mark = project.changes().len();
        (self.reporter)(ScaffoldEvent::Started(step));
    }

    fn finish<S: FileSink>(&mut self, project: &Project<S>, step: Step) {
        (self.reporter)(ScaffoldEvent::Finished {
            step,
            changes: project.changes().len() - self.mark,
        });
    }

    fn skip(&mut self, step: Step) {
        (self.reporter)(ScaffoldEvent::Skipped(step));
    }
}
