use clap::Parser;
use colored::Colorize;
use ngforge_cli::cli::{self, Cli};
use ngforge_cli::prompt::TerminalPrompter;
use ngforge_cli::runner::SystemRunner;

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);
    cli::install_panic_hook();

    if let Err(e) = cli::execute(&cli, &TerminalPrompter, &SystemRunner) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}
