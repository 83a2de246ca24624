use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{AppError, Scope, UnitDirs, UnitName};
use crate::ports::UnitStore;

/// Filesystem-based unit store.
///
/// Writes go straight to the target path: a failure partway through can leave a
/// truncated file behind. Target directories must already exist.
#[derive(Debug, Clone, Default)]
pub struct FilesystemUnitStore {
    dirs: UnitDirs,
}

impl FilesystemUnitStore {
    pub fn new(dirs: UnitDirs) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &UnitDirs {
        &self.dirs
    }
}

impl UnitStore for FilesystemUnitStore {
    fn unit_path(&self, name: &UnitName, scope: Scope) -> PathBuf {
        self.dirs.unit_path(name, scope)
    }

    fn write_unit(
        &self,
        name: &UnitName,
        scope: Scope,
        content: &[u8],
    ) -> Result<PathBuf, AppError> {
        let path = self.unit_path(name, scope);
        let fs_error = |source| AppError::FileSystem { path: path.clone(), source };

        let mut file = File::create(&path).map_err(fs_error)?;
        file.write_all(content).map_err(fs_error)?;
        file.flush().map_err(fs_error)?;

        debug!(path = %path.display(), bytes = content.len(), %scope, "wrote unit file");
        Ok(path)
    }
}
