//! Runtime variables available to every platform file
//!
//! Platform recipes reference install and build locations such as
//! `{runtime.platform.path}` and `{build.path}`. These are not in any property
//! file, so they are seeded into the variable database before loading.

use super::{PlatformLayout, host_os_tag};
use crate::props::PropertyMap;

/// Per-run values that feed the runtime variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInputs {
    pub layout: PlatformLayout,
    /// IDE version as a plain number, e.g. `10819`
    pub ide_version: u32,
    /// Architecture directory name, e.g. `avr`
    pub arch: String,
    pub build_path: String,
    pub project_name: String,
}

impl RuntimeInputs {
    /// Seed install, host and build variables
    pub fn seed(&self, vars: &mut PropertyMap) {
        let version = self.ide_version.to_string();

        vars.insert("runtime.platform.path", path_value(&self.layout.platform_dir));
        vars.insert("runtime.hardware.path", path_value(&self.layout.hardware_dir));
        vars.insert("runtime.ide.path", path_value(&self.layout.root));
        vars.insert("runtime.ide.version", version.clone());

        if let Some(os) = host_os_tag() {
            vars.insert("runtime.os", os);
        }

        vars.insert("ide_version", version);
        vars.insert("build.path", self.build_path.as_str());
        vars.insert("build.project_name", self.project_name.as_str());
        vars.insert("build.arch", self.arch.to_uppercase());
    }

    /// Inject the bundled AVR toolchain locations
    ///
    /// Runs after board properties are merged, so these win over board keys.
    pub fn inject_tool_paths(&self, vars: &mut PropertyMap) {
        let avr_tools = path_value(&self.layout.avr_tools_dir());

        vars.insert("runtime.tools.avr-gcc.path", avr_tools.clone());
        vars.insert("runtime.tools.avrdude.path", avr_tools);
    }
}

fn path_value(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}
