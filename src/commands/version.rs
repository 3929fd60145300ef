//! Version command: tool version plus the defaults a resolve run starts from

use crate::error::Result;
use crate::platform::host_os_tag;
use crate::props::expand::DEFAULT_MAX_PASSES;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", report());
    Ok(())
}

fn report() -> String {
    format!(
        "boardprops {}\n\nResolve defaults:\n  Max passes: {}\n  runtime.os: {}\n  Profile: {}\n",
        env!("CARGO_PKG_VERSION"),
        DEFAULT_MAX_PASSES,
        host_os_tag().unwrap_or("(unset)"),
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
    )
}
