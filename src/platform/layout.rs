//! Install directory layout
//!
//! An install keeps one directory per vendor under `hardware/`, and one
//! platform directory per architecture under that:
//!
//! ```text
//! <root>/hardware/<vendor>/<arch>/boards.txt
//! <root>/hardware/<vendor>/<arch>/platform.txt
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

pub const BOARDS_FILE: &str = "boards.txt";
pub const PLATFORM_FILE: &str = "platform.txt";

/// Resolved directories for one vendor/architecture pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLayout {
    /// Absolute install root
    pub root: PathBuf,
    /// `<root>/hardware/<vendor>`
    pub hardware_dir: PathBuf,
    /// `<hardware_dir>/<arch>`
    pub platform_dir: PathBuf,
}

impl PlatformLayout {
    /// Build the layout, making `root` absolute without touching the filesystem
    pub fn new(root: &Path, vendor: &str, arch: &str) -> Result<Self> {
        let root = std::path::absolute(root)?;
        let hardware_dir = root.join("hardware").join(vendor);
        let platform_dir = hardware_dir.join(arch);

        Ok(Self {
            root,
            hardware_dir,
            platform_dir,
        })
    }

    pub fn boards_file(&self) -> PathBuf {
        self.platform_dir.join(BOARDS_FILE)
    }

    pub fn platform_file(&self) -> PathBuf {
        self.platform_dir.join(PLATFORM_FILE)
    }

    /// Bundled AVR toolchain directory (`<root>/hardware/tools/avr`)
    pub fn avr_tools_dir(&self) -> PathBuf {
        self.root.join("hardware").join("tools").join("avr")
    }

    /// Check both input files exist, boards file first
    pub fn validate(&self) -> Result<()> {
        let boards = self.boards_file();
        if !boards.is_file() {
            return Err(fs_error::missing_input("Boards", &boards));
        }

        let platform = self.platform_file();
        if !platform.is_file() {
            return Err(fs_error::missing_input("Platform", &platform));
        }

        Ok(())
    }
}
