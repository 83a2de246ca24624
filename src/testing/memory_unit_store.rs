use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Scope, UnitDirs, UnitName};
use crate::ports::UnitStore;

/// In-memory unit store rooted at `/system` and `/user`.
pub struct MemoryUnitStore {
    dirs: UnitDirs,
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    writes: RefCell<usize>,
}

#[allow(dead_code)]
impl MemoryUnitStore {
    pub fn new() -> Self {
        Self {
            dirs: UnitDirs::new("/system", "/user"),
            files: RefCell::new(HashMap::new()),
            writes: RefCell::new(0),
        }
    }

    pub fn content(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl UnitStore for MemoryUnitStore {
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
        self.files.borrow_mut().insert(path.clone(), content.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(path)
    }
}
