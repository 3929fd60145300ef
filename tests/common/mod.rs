//! Common test utilities for boardprops integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway Arduino install root for integration tests
pub struct TestInstall {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to install root
    pub path: PathBuf,
}

impl TestInstall {
    /// Create an empty install root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create an install root holding the bundled `arduino/avr` fixture core
    #[allow(dead_code)]
    pub fn with_avr_fixture() -> Self {
        let install = Self::new();
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("hardware");

        copy_dir_recursive(&fixture_path, &install.path.join("hardware"))
            .expect("Failed to copy fixture hardware");

        install
    }

    /// Write a file relative to the install root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the install root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the install root
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `boardprops resolve` against this install with every required flag set
    ///
    /// Output goes to `out/platform.txt` under the install root.
    #[allow(dead_code)]
    pub fn resolve_cmd(&self, vendor: &str, arch: &str, board_tag: &str) -> Command {
        std::fs::create_dir_all(self.path.join("out")).expect("Failed to create out directory");

        let mut cmd = boardprops_cmd();
        cmd.arg("resolve")
            .arg("--arduino-dir")
            .arg(&self.path)
            .args(["--arduino-ver", "10819"])
            .args(["--vendor", vendor])
            .args(["--arch", arch])
            .args(["--board-tag", board_tag])
            .arg("--build-path")
            .arg(self.path.join("build"))
            .args(["--project-name", "blink"])
            .arg("--output-file")
            .arg(self.path.join("out").join("platform.txt"));
        cmd
    }
}

impl Default for TestInstall {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the boardprops binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn boardprops_cmd() -> Command {
    let mut cmd = Command::cargo_bin("boardprops").expect("Failed to find boardprops binary");
    for (key, _) in std::env::vars() {
        if key.starts_with("BOARDPROPS_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
