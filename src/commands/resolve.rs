//! Resolve command implementation
//!
//! Builds the variable and output databases for one board, expands the
//! platform properties and writes them out:
//!
//! 1. runtime variables are seeded into the variable database
//! 2. the board's `boards.txt` entries are merged in, plus suffix aliases
//! 3. bundled tool paths are injected
//! 4. `platform.txt` is merged into both databases
//! 5. the output database is expanded and written

use std::path::PathBuf;

use crate::cli::ResolveArgs;
use crate::error::{Result, config};
use crate::platform::{PlatformLayout, RuntimeInputs};
use crate::props::{
    self, ExpandOptions, ExpansionReport, PropertyMap, UnresolvedPolicy,
    alias_first_matching_suffix,
};

/// Board keys whose concrete name varies; templates use the suffix itself
const CANONICAL_SUFFIXES: [&str; 2] = ["build.flash_ld", "build.mcu"];

/// Everything one resolve run needs
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub runtime: RuntimeInputs,
    pub board_tag: String,
    pub output_file: PathBuf,
    pub options: ExpandOptions,
}

impl ResolveRequest {
    /// Build a request from parsed CLI arguments
    pub fn from_args(args: &ResolveArgs) -> Result<Self> {
        if args.board_tag.trim().is_empty() {
            return Err(config::invalid("board tag must not be empty"));
        }

        let layout = PlatformLayout::new(&args.arduino_dir, &args.vendor, &args.arch)?;

        Ok(Self {
            runtime: RuntimeInputs {
                layout,
                ide_version: args.arduino_ver,
                arch: args.arch.clone(),
                build_path: args.build_path.clone(),
                project_name: args.project_name.clone(),
            },
            board_tag: args.board_tag.clone(),
            output_file: args.output_file.clone(),
            options: ExpandOptions {
                max_passes: args.max_passes,
                unresolved: if args.keep_unresolved {
                    UnresolvedPolicy::Keep
                } else {
                    UnresolvedPolicy::Error
                },
            },
        })
    }
}

/// Databases at the end of a run
#[derive(Debug)]
pub struct Resolution {
    pub variables: PropertyMap,
    pub output: PropertyMap,
    pub report: ExpansionReport,
}

/// Run resolve command
pub fn run(args: ResolveArgs) -> Result<()> {
    let request = ResolveRequest::from_args(&args)?;
    let resolution = resolve(&request)?;

    if args.dump_variables {
        print!("{}", props::writer::render(&resolution.variables));
    }

    Ok(())
}

/// Load, expand and write the platform properties described by `request`
///
/// Nothing is read or written unless both input files exist.
pub fn resolve(request: &ResolveRequest) -> Result<Resolution> {
    let layout = &request.runtime.layout;
    tracing::info!("Platform directory: {}", layout.platform_dir.display());

    layout.validate()?;

    let mut variables = PropertyMap::new();
    request.runtime.seed(&mut variables);

    let mut board = PropertyMap::new();
    props::load(&layout.boards_file(), &request.board_tag, &mut board)?;
    if board.is_empty() {
        tracing::warn!(board_tag = %request.board_tag, "No board properties found for board tag");
    }
    variables.extend(&board);

    for suffix in CANONICAL_SUFFIXES {
        alias_first_matching_suffix(&board, &mut variables, suffix);
    }

    request.runtime.inject_tool_paths(&mut variables);

    let mut platform = PropertyMap::new();
    props::load(&layout.platform_file(), "", &mut platform)?;
    variables.extend(&platform);

    let mut output = platform;
    let report = props::expand(&mut output, &variables, request.options)?;
    tracing::debug!(
        passes = report.passes,
        converged = report.converged,
        variables = variables.len(),
        "Expanded platform properties"
    );

    props::write(&output, &request.output_file)?;
    tracing::info!(
        "Wrote {} properties to {}",
        output.len(),
        request.output_file.display()
    );

    Ok(Resolution {
        variables,
        output,
        report,
    })
}
