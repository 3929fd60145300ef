//! Resolved output serialization

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::PropertyMap;
use crate::error::{Result, fs as fs_error};

/// Render `output` as newline-terminated `key=value` lines, in order
pub fn render(output: &PropertyMap) -> String {
    let mut rendered = String::new();
    for (key, value) in output {
        rendered.push_str(key);
        rendered.push('=');
        rendered.push_str(value);
        rendered.push('\n');
    }
    rendered
}

/// Write `output` to `path`, replacing any existing file
pub fn write(output: &PropertyMap, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| fs_error::write_failed(path, e))?;
    let mut writer = BufWriter::new(file);

    for (key, value) in output {
        writeln!(writer, "{key}={value}").map_err(|e| fs_error::write_failed(path, e))?;
    }
    writer.flush().map_err(|e| fs_error::write_failed(path, e))?;

    tracing::debug!(path = %path.display(), entries = output.len(), "Wrote resolved properties");
    Ok(())
}
