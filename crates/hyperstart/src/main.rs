//! Hyperstart CLI - Scaffold React apps from composable templates

use anyhow::Result;
use clap::Parser;
use hyperstart_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hyperstart")]
#[command(about = "Interactive CLI for scaffolding React apps with templates, CSS frameworks and backend services")]
#[command(version)]
pub struct Args {
    /// YAML answer file; skips the interactive prompts
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Parent directory the project is created in (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip the final confirmation (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            answers: args.answers,
            directory: args.directory,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result: Result<()> = hyperstart_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        let _ = cliclack::log::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
