//! External process invocation
//!
//! Every package-manager and scaffolding binary goes through a `CommandRunner`.
//! `ProcessRunner` spawns the real process and streams its output line by line;
//! `RecordingRunner` only records what would have run.

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// A single command line with an optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    interactive: bool,
}

impl Invocation {
    pub fn new<I, A>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            interactive: false,
        }
    }

    /// `npm install <packages>`, optionally as dev dependencies
    pub fn npm_install<I, A>(packages: I, dev: bool) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let mut args = vec!["install".to_string()];
        if dev {
            args.push("-D".to_string());
        }
        args.extend(packages.into_iter().map(Into::into));
        Self::new("npm", args)
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Hand the terminal to the process instead of streaming its output,
    /// so prompts without a trailing newline stay visible
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands one at a time
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run to completion. A non-zero exit is an error.
    async fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Spawns real processes and streams their output
#[derive(Debug, Default)]
pub struct ProcessRunner {
    quiet: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the streamed output (the "Running:" line is still printed)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&mut self, invocation: &Invocation) -> Result<()> {
        let command = invocation.to_string();
        println!();
        println!("{} {}", "Running:".dimmed(), command.yellow());
        println!();

        let (stdout, stderr) = if invocation.is_interactive() {
            (Stdio::inherit(), Stdio::inherit())
        } else {
            (Stdio::piped(), Stdio::piped())
        };
        let mut cmd = TokioCommand::new(invocation.program());
        cmd.args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(stderr);
        if let Some(dir) = invocation.cwd() {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| ScaffoldError::CommandSpawn {
            command: command.clone(),
            source,
        })?;

        // Inherited streams leave nothing to take here
        let mut stdout = child.stdout.take().map(|s| BufReader::new(s).lines());
        let mut stderr = child.stderr.take().map(|s| BufReader::new(s).lines());

        while stdout.is_some() || stderr.is_some() {
            tokio::select! {
                line = next_line(&mut stdout), if stdout.is_some() => match line {
                    Some(line) if !self.quiet => println!("  {}", line),
                    Some(_) => {}
                    None => stdout = None,
                },
                line = next_line(&mut stderr), if stderr.is_some() => match line {
                    Some(line) if !self.quiet => eprintln!("  {}", line.yellow()),
                    Some(_) => {}
                    None => stderr = None,
                },
            }
        }

        let status = child.wait().await.map_err(|source| ScaffoldError::CommandSpawn {
            command: command.clone(),
            source,
        })?;
        println!();

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command,
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

type Lines<R> = tokio::io::Lines<BufReader<R>>;

/// Next line of a stream, or `None` once it is closed or unreadable
async fn next_line<R>(reader: &mut Option<Lines<R>>) -> Option<String>
where
    R: tokio::io::AsyncRead + Unpin,
{
    match reader {
        Some(lines) => match lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{} {}", "Error reading output:".red(), e);
                None
            }
        },
        None => None,
    }
}

/// Records invocations without running anything
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    invocations: Vec<Invocation>,
    fail_program_arg: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation whose arguments contain `arg`
    pub fn failing_on(arg: impl Into<String>) -> Self {
        Self {
            invocations: Vec::new(),
            fail_program_arg: Some(arg.into()),
        }
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Every command line, rendered
    pub fn commands(&self) -> Vec<String> {
        self.invocations.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&mut self, invocation: &Invocation) -> Result<()> {
        self.invocations.push(invocation.clone());
        match &self.fail_program_arg {
            Some(arg) if invocation.args().iter().any(|a| a == arg) => {
                Err(ScaffoldError::CommandFailed {
                    command: invocation.to_string(),
                    code: 1,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_args_with_spaces() {
        let inv = Invocation::new("npm", ["create", "vite@latest", "my app"]);
        assert_eq!(inv.to_string(), "npm create vite@latest \"my app\"");
    }

    #[test]
    fn test_npm_install_dev_flag() {
        let inv = Invocation::npm_install(["vite-plugin-pwa"], true);
        assert_eq!(inv.to_string(), "npm install -D vite-plugin-pwa");
    }

    #[tokio::test]
    async fn test_recording_runner_records_and_fails() {
        let mut runner = RecordingRunner::failing_on("firebase");
        runner
            .run(&Invocation::npm_install(["axios"], false))
            .await
            .unwrap();
        let err = runner
            .run(&Invocation::npm_install(["firebase"], false))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::CommandFailed { code: 1, .. }));
        assert_eq!(runner.invocations().len(), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_reports_exit_code() {
        let mut runner = ProcessRunner::new().quiet(true);
        runner
            .run(&Invocation::new("sh", ["-c", "echo ok"]))
            .await
            .unwrap();

        let err = runner
            .run(&Invocation::new("sh", ["-c", "exit 3"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandFailed { code: 3, .. }));
    }

    #[test]
    fn test_interactive_keeps_command_line() {
        let inv = Invocation::new("npx", ["create-next-app@latest", "demo"]).interactive();
        assert!(inv.is_interactive());
        assert!(!Invocation::npm_install(["axios"], false).is_interactive());
        assert_eq!(inv.to_string(), "npx create-next-app@latest demo");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_interactive_exit_code() {
        let mut runner = ProcessRunner::new();
        let err = runner
            .run(&Invocation::new("sh", ["-c", "printf 'no newline'; exit 2"]).interactive())
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandFailed { code: 2, .. }));
    }

    #[tokio::test]
    async fn test_process_runner_missing_binary() {
        let mut runner = ProcessRunner::new().quiet(true);
        let err = runner
            .run(&Invocation::new("hyperstart-no-such-binary", Vec::<String>::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandSpawn { .. }));
    }
}
