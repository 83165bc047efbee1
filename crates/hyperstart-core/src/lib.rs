//! Hyperstart Core - React project scaffolding engine
//!
//! Turns an answer set (framework, CSS framework, optional services and a
//! feature template) into a ready-to-run React project: it drives the base
//! scaffold tool and npm, writes configuration and source files, and patches
//! the files the base scaffold generated so the result is consistent.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Leaves** - `project` (file sink and change log) and `runtime` (process runner, toolchain check)
//! - **Generators** - `css`, `services`, `templates`, `cleanup` and `readme`, each a function of the answer set
//! - **Orchestration** - `scaffold` runs the generators in their fixed order and reports progress as events
//! - **CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use hyperstart_core::{scaffold, Answers, DiskSink, ProcessRunner};
//!
//! let answers = Answers::from_file("answers.yaml".as_ref())?.finalize()?;
//! let mut runner = ProcessRunner::new();
//! let report = scaffold::run(&answers, ".".as_ref(), DiskSink, &mut runner, |event| {
//!     println!("{:?}", event);
//! })
//! .await?;
//! ```

pub mod answers;
pub mod cleanup;
pub mod config;
pub mod css;
pub mod error;
pub mod patch;
pub mod project;
pub mod readme;
pub mod runtime;
pub mod scaffold;
pub mod services;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, Answers};
pub use error::{Result, ScaffoldError};
pub use project::{DiskSink, FileChange, FileSink, Layout, MemorySink, Project};
pub use runtime::{check_toolchain, CommandRunner, Invocation, ProcessRunner, RecordingRunner};
pub use scaffold::{ScaffoldEvent, ScaffoldReport, Step};

#[cfg(feature = "tui")]
pub use tui::run;
