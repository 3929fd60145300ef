//! Host OS detection for the `runtime.os` variable

/// OS tag for the host this binary was built for, if it is a supported one
pub fn host_os_tag() -> Option<&'static str> {
    os_tag(std::env::consts::OS)
}

/// Map a Rust `target_os` name to the tag platform files expect
///
/// Returns `None` for hosts without a tag; `runtime.os` is then left unset.
pub fn os_tag(target_os: &str) -> Option<&'static str> {
    match target_os {
        "linux" => Some("linux"),
        "macos" => Some("macosx"),
        "windows" | "cygwin" => Some("windows"),
        _ => None,
    }
}
