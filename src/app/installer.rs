//! Unit installation: render a template, then write the unit file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemUnitStore, MinijinjaRenderer};
use crate::app::Config;
use crate::domain::{AppError, Bindings, Scope, UnitName};
use crate::ports::{TemplateRenderer, UnitStore};

/// Installs service units into the directory selected by scope.
pub struct UnitInstaller<S: UnitStore, R: TemplateRenderer> {
    store: S,
    renderer: R,
}

impl UnitInstaller<FilesystemUnitStore, MinijinjaRenderer> {
    /// Installer writing to the configured unit directories.
    pub fn from_config(config: &Config) -> Self {
        Self::new(FilesystemUnitStore::new(config.unit_dirs.clone()), MinijinjaRenderer::new())
    }
}

impl<S: UnitStore, R: TemplateRenderer> UnitInstaller<S, R> {
    pub fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render the template at `template_path` and install the result as `<name>.service`.
    ///
    /// Nothing is written unless the name is valid, `Cwd` is bound to a non-empty
    /// value, and the template loads and renders.
    pub fn install_from_template(
        &self,
        name: &str,
        template_path: &Path,
        bindings: &Bindings,
        scope: Scope,
    ) -> Result<PathBuf, AppError> {
        let name = UnitName::new(name)?;
        let content = self.render(template_path, bindings)?;
        self.store.write_unit(&name, scope, content.as_bytes())
    }

    /// Install pre-rendered unit content as `<name>.service`.
    ///
    /// Content is written verbatim. The write is not atomic.
    pub fn install_raw(
        &self,
        name: &str,
        content: &[u8],
        scope: Scope,
    ) -> Result<PathBuf, AppError> {
        let name = UnitName::new(name)?;
        self.store.write_unit(&name, scope, content)
    }

    /// Render the template at `template_path` without installing it.
    pub fn render(&self, template_path: &Path, bindings: &Bindings) -> Result<String, AppError> {
        bindings.require_cwd()?;
        let template = fs::read_to_string(template_path)
            .map_err(|err| AppError::template_load(template_path, err))?;
        self.renderer.render(&template, bindings, template_path)
    }

    /// Path the unit would be installed to.
    pub fn unit_path(&self, name: &str, scope: Scope) -> Result<PathBuf, AppError> {
        let name = UnitName::new(name)?;
        Ok(self.store.unit_path(&name, scope))
    }
}
