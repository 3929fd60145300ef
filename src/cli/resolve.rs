use std::path::PathBuf;

use clap::Parser;

use crate::props::expand::DEFAULT_MAX_PASSES;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve the Arduino Uno configuration:\n    \
                  boardprops resolve --arduino-dir /opt/arduino-1.8.19 --arduino-ver 10819 \\\n      \
                  --vendor arduino --arch avr --board-tag uno \\\n      \
                  --build-path build --project-name blink --output-file build/platform.txt\n\n\
                  Leave build-time placeholders such as {source_file} unexpanded:\n    \
                  boardprops resolve ... --keep-unresolved")]
pub struct ResolveArgs {
    /// Path to the Arduino install directory
    #[arg(long, value_name = "DIR", env = "BOARDPROPS_ARDUINO_DIR")]
    pub arduino_dir: PathBuf,

    /// Arduino version as a number (e.g. 10819)
    #[arg(long, value_name = "VERSION", env = "BOARDPROPS_ARDUINO_VER")]
    pub arduino_ver: u32,

    /// Hardware vendor directory name (e.g. arduino, esp8266com)
    #[arg(long, env = "BOARDPROPS_VENDOR")]
    pub vendor: String,

    /// Hardware architecture directory name (e.g. avr, esp8266)
    #[arg(long, env = "BOARDPROPS_ARCH")]
    pub arch: String,

    /// Board tag (e.g. uno, yun, nano, d1)
    #[arg(long, env = "BOARDPROPS_BOARD_TAG")]
    pub board_tag: String,

    /// Directory of build artifacts (for build.path)
    #[arg(long, value_name = "DIR", env = "BOARDPROPS_BUILD_PATH")]
    pub build_path: String,

    /// Project name (for build.project_name)
    #[arg(long, env = "BOARDPROPS_PROJECT_NAME")]
    pub project_name: String,

    /// File to write the resolved properties to
    #[arg(long, value_name = "FILE", env = "BOARDPROPS_OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Maximum number of substitution passes
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PASSES, env = "BOARDPROPS_MAX_PASSES")]
    pub max_passes: usize,

    /// Keep placeholders that name no known variable instead of failing
    #[arg(long)]
    pub keep_unresolved: bool,

    /// Print the variable database to stdout after expansion
    #[arg(long)]
    pub dump_variables: bool,
}
