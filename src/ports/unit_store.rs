use std::path::PathBuf;

use crate::domain::{AppError, Scope, UnitName};

/// Port for persisting unit files.
pub trait UnitStore {
    /// Path the unit would be written to.
    fn unit_path(&self, name: &UnitName, scope: Scope) -> PathBuf;

    /// Create or truncate the unit file and write `content` in full.
    fn write_unit(
        &self,
        name: &UnitName,
        scope: Scope,
        content: &[u8],
    ) -> Result<PathBuf, AppError>;
}
