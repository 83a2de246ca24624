//! Application configuration.

use crate::domain::UnitDirs;

/// Control-plane executable invoked when none is configured.
pub const DEFAULT_SYSTEMCTL: &str = "systemctl";

/// Host-level settings shared by the installer and the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where unit files are written, per scope.
    pub unit_dirs: UnitDirs,
    /// Control-plane executable name or path.
    pub systemctl: String,
}

impl Config {
    /// Redirect unit files to custom directories.
    pub fn with_unit_dirs(mut self, unit_dirs: UnitDirs) -> Self {
        self.unit_dirs = unit_dirs;
        self
    }

    /// Use a different control-plane executable.
    pub fn with_systemctl(mut self, systemctl: impl Into<String>) -> Self {
        self.systemctl = systemctl.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { unit_dirs: UnitDirs::default(), systemctl: DEFAULT_SYSTEMCTL.to_string() }
    }
}
