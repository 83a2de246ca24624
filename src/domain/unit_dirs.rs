use std::path::{Path, PathBuf};

use super::{Scope, UnitName};

/// Directory holding system-wide unit files.
pub const SYSTEM_UNIT_DIR: &str = "/lib/systemd/system";
/// Directory holding per-user unit files.
pub const USER_UNIT_DIR: &str = "/lib/systemd/user";

/// Target directories for installed units, one per scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDirs {
    pub system: PathBuf,
    pub user: PathBuf,
}

impl UnitDirs {
    pub fn new(system: impl Into<PathBuf>, user: impl Into<PathBuf>) -> Self {
        Self { system: system.into(), user: user.into() }
    }

    pub fn for_scope(&self, scope: Scope) -> &Path {
        match scope {
            Scope::System => &self.system,
            Scope::User => &self.user,
        }
    }

    /// Full path of the unit file for `name` in `scope`.
    pub fn unit_path(&self, name: &UnitName, scope: Scope) -> PathBuf {
        self.for_scope(scope).join(name.file_name())
    }
}

impl Default for UnitDirs {
    fn default() -> Self {
        Self::new(SYSTEM_UNIT_DIR, USER_UNIT_DIR)
    }
}
