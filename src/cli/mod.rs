//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod resolve;

pub use completions::CompletionsArgs;
pub use resolve::ResolveArgs;

/// boardprops - board and platform property resolver
///
/// Flatten an Arduino-style hardware core into resolved build variables.
#[derive(Parser, Debug)]
#[command(
    name = "boardprops",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve boards.txt and platform.txt properties into flat build variables",
    long_about = "boardprops loads the boards.txt and platform.txt of a hardware core, \
                  expands {key} references between them and writes the resolved \
                  platform properties as key=value lines for a downstream build step.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  boardprops resolve --arduino-dir /opt/arduino --arduino-ver 10819 \\\n     \
                  --vendor arduino --arch avr --board-tag uno --build-path build \\\n     \
                  --project-name blink --output-file build/platform.txt\n   \
                  boardprops completions zsh           \x1b[90m# Generate zsh completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve board and platform properties into an output file
    Resolve(Box<ResolveArgs>),

    /// Show version and resolve defaults
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const RESOLVE_ARGS: [&str; 18] = [
        "boardprops",
        "resolve",
        "--arduino-dir",
        "/opt/arduino",
        "--arduino-ver",
        "10819",
        "--vendor",
        "arduino",
        "--arch",
        "avr",
        "--board-tag",
        "uno",
        "--build-path",
        "/tmp/build",
        "--project-name",
        "blink",
        "--output-file",
        "/tmp/build/platform.txt",
    ];

    #[test]
    fn test_cli_parsing_resolve() {
        let cli = Cli::try_parse_from(RESOLVE_ARGS).unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.arduino_dir, PathBuf::from("/opt/arduino"));
                assert_eq!(args.arduino_ver, 10819);
                assert_eq!(args.vendor, "arduino");
                assert_eq!(args.arch, "avr");
                assert_eq!(args.board_tag, "uno");
                assert_eq!(args.build_path, "/tmp/build");
                assert_eq!(args.project_name, "blink");
                assert_eq!(args.output_file, PathBuf::from("/tmp/build/platform.txt"));
                assert!(!args.keep_unresolved);
                assert!(!args.dump_variables);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_resolve_default_max_passes() {
        let cli = Cli::try_parse_from(RESOLVE_ARGS).unwrap();
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.max_passes, 10),
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_resolve_optional_flags() {
        let mut argv = RESOLVE_ARGS.to_vec();
        argv.extend(["--max-passes", "3", "--keep-unresolved", "--dump-variables", "-v"]);

        let cli = Cli::try_parse_from(argv).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.max_passes, 3);
                assert!(args.keep_unresolved);
                assert!(args.dump_variables);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_resolve_rejects_non_numeric_version() {
        let mut argv = RESOLVE_ARGS.to_vec();
        argv[5] = "1.8.19";

        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["boardprops", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["boardprops", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
