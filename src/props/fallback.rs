//! Suffix fallback aliases
//!
//! Board definitions spell some keys differently per board or menu option
//! (`build.flash_ld`, `menu.cpu.atmega328.build.mcu`, ...), while platform
//! templates reference one canonical name. The first board key ending in the
//! canonical suffix is copied into the variable database under that name.
//!
//! A key also matches when the suffix is followed by a `_<variant>` tail in
//! its last segment, so `build.flash_ld_custom` stands in for `build.flash_ld`.

use super::PropertyMap;

/// Set `target[suffix]` to the value of the first `source` key matching `suffix`
///
/// Scans `source` in insertion order and stops at the first match. Returns
/// the matched source key, or `None` (leaving `target` untouched) when no key
/// matches.
pub fn alias_first_matching_suffix<'a>(
    source: &'a PropertyMap,
    target: &mut PropertyMap,
    suffix: &str,
) -> Option<&'a str> {
    let (key, value) = source
        .iter()
        .find(|(key, _)| matches_suffix(key, suffix))?;

    tracing::debug!("'{key}' ends with '{suffix}'");
    target.insert(suffix, value);

    Some(key)
}

/// `key` ends in `suffix`, optionally followed by a dot-free `_<variant>` tail
fn matches_suffix(key: &str, suffix: &str) -> bool {
    if suffix.is_empty() {
        return false;
    }
    if key.ends_with(suffix) {
        return true;
    }

    key.rfind(suffix).is_some_and(|pos| {
        let tail = &key[pos + suffix.len()..];
        tail.len() > 1 && tail.starts_with('_') && !tail.contains('.')
    })
}
