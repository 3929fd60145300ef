//! Property file loading
//!
//! Parses `boards.txt` / `platform.txt` style files: one `key=value` per line,
//! `#` comments and blank lines ignored. A non-empty prefix scopes the load to
//! `<prefix>.`-namespaced lines (one board out of a shared boards file) and
//! strips the namespace from the loaded keys.

use std::fs;
use std::path::Path;

use super::PropertyMap;
use crate::error::{Result, fs as fs_error, props as props_error};

/// Load `path` into `target`, keeping only lines under `prefix` when non-empty
pub fn load(path: &Path, prefix: &str, target: &mut PropertyMap) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;

    let before = target.len();
    parse_str(&content, prefix, target, &path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        prefix,
        added = target.len() - before,
        "Loaded property file"
    );

    Ok(())
}

/// Parse property file content into `target`
///
/// `origin` labels the content in error messages (usually the file path).
pub fn parse_str(
    content: &str,
    prefix: &str,
    target: &mut PropertyMap,
    origin: &str,
) -> Result<()> {
    let scope = format!("{prefix}.");

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = if prefix.is_empty() {
            line
        } else {
            match line.strip_prefix(scope.as_str()) {
                Some(rest) => rest,
                None => continue,
            }
        };

        let Some((key, value)) = line.split_once('=') else {
            return Err(props_error::malformed_line(origin, idx + 1, raw.trim()));
        };

        target.insert(key, value);
    }

    Ok(())
}
