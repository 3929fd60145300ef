//! boardprops - board and platform property resolver
//!
//! Loads the `boards.txt` and `platform.txt` of an Arduino-style hardware core,
//! expands `{key}` templates across both files and writes the resolved
//! platform properties for a downstream build step.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod platform;
mod props;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Environment variable that overrides the log filter, e.g. `BOARDPROPS_LOG=trace`
const LOG_ENV: &str = "BOARDPROPS_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(*args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
