//! Hardware platform layout and runtime environment
//!
//! This module handles:
//! - Locating the hardware and platform directories of an install (via layout module)
//! - Host OS detection for `runtime.os` (via detection module)
//! - The runtime variables every platform file may reference (via runtime module)

pub mod detection;
pub mod layout;
pub mod runtime;

pub use detection::host_os_tag;
pub use layout::PlatformLayout;
pub use runtime::RuntimeInputs;
