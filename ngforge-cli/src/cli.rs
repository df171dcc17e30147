//! Command-line definition and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{component, directive, guard, init, model, package, page, pipe, service};
use crate::error::ScaffoldResult;
use crate::project::Project;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;

#[derive(Parser, Debug)]
#[command(name = "ngforge", version, about = "ngforge - scaffold Angular standalone projects")]
pub struct Cli {
    /// Angular project root (the directory holding angular.json)
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Every subcommand is interactive; answers are prompted for.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Set up core services, guards, layout and the default modules
    Init,
    /// Create a feature module and register its routes
    Package,
    /// Create a page inside a module and route it
    Page,
    /// Create a standalone component (shared or in a module)
    Component,
    /// Create a service through the Angular CLI
    Service,
    /// Create a model interface inside a module
    Model,
    /// Create a functional route guard
    Guard,
    /// Create an attribute directive
    Directive,
    /// Create a pipe
    Pipe,
}

/// Check the project root, then run the selected command.
pub fn execute(cli: &Cli, prompter: &dyn Prompter, runner: &dyn CommandRunner) -> ScaffoldResult<()> {
    let project = Project::open(&cli.project_root)?;
    tracing::debug!(root = %project.root().display(), command = ?cli.command, "running");

    match cli.command {
        Commands::Init => init::run(&project),
        Commands::Package => package::run(&project, prompter),
        Commands::Page => page::run(&project, prompter),
        Commands::Component => component::run(&project, prompter),
        Commands::Service => service::run(&project, prompter, runner),
        Commands::Model => model::run(&project, prompter),
        Commands::Guard => guard::run(&project, prompter),
        Commands::Directive => directive::run(&project, prompter),
        Commands::Pipe => pipe::run(&project, prompter),
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` is honoured; without it only warnings are shown. `verbose`
/// forces the `debug` level.
///
/// Call this once, at the very start of `main`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log any panic and exit with status 1.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "unexpected panic");
        default_hook(info);
        std::process::exit(1);
    }));
}
