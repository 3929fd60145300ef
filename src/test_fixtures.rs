//! Test fixtures for building throwaway hardware cores.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::HardwareCore;
//!
//! #[test]
//! fn my_test() {
//!     let core = HardwareCore::new("arduino", "avr")
//!         .with_boards("uno.build.mcu=atmega328p\n")
//!         .with_platform("compiler.cpu={build.mcu}\n");
//!     let request = core.request("uno");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use tempfile::TempDir;

use crate::commands::resolve::ResolveRequest;
use crate::platform::{PlatformLayout, RuntimeInputs};
use crate::props::ExpandOptions;

/// A temporary install root with one `hardware/<vendor>/<arch>` directory
pub struct HardwareCore {
    pub temp: TempDir,
    pub layout: PlatformLayout,
    pub arch: String,
}

impl HardwareCore {
    /// Create an install root; the platform directory itself is created lazily
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    pub fn new(vendor: &str, arch: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let layout =
            PlatformLayout::new(temp.path(), vendor, arch).expect("Failed to build layout");
        Self {
            temp,
            layout,
            arch: arch.to_string(),
        }
    }

    /// Write `boards.txt`
    #[must_use]
    pub fn with_boards(self, content: &str) -> Self {
        self.write(self.layout.boards_file(), content);
        self
    }

    /// Write `platform.txt`
    #[must_use]
    pub fn with_platform(self, content: &str) -> Self {
        self.write(self.layout.platform_file(), content);
        self
    }

    /// Path for the resolved output inside the temp root
    pub fn output_file(&self) -> PathBuf {
        self.temp.path().join("build").join("platform.resolved.txt")
    }

    /// Request for `board_tag` with default expansion options
    pub fn request(&self, board_tag: &str) -> ResolveRequest {
        let build_dir = self.temp.path().join("build");
        std::fs::create_dir_all(&build_dir).expect("Failed to create build directory");

        ResolveRequest {
            runtime: RuntimeInputs {
                layout: self.layout.clone(),
                ide_version: 10819,
                arch: self.arch.clone(),
                build_path: build_dir.to_string_lossy().into_owned(),
                project_name: "blink".to_string(),
            },
            board_tag: board_tag.to_string(),
            output_file: self.output_file(),
            options: ExpandOptions::default(),
        }
    }

    fn write(&self, path: PathBuf, content: &str) {
        std::fs::create_dir_all(&self.layout.platform_dir)
            .expect("Failed to create platform directory");
        std::fs::write(path, content).expect("Failed to write fixture file");
    }
}
