use std::path::Path;

use crate::domain::{AppError, Bindings};

/// Port for rendering unit-file templates.
pub trait TemplateRenderer {
    /// Render `template` source against `bindings`.
    ///
    /// Syntax errors surface as `AppError::TemplateLoad` and evaluation errors as
    /// `AppError::TemplateRender`, both tagged with `template_path`.
    fn render(
        &self,
        template: &str,
        bindings: &Bindings,
        template_path: &Path,
    ) -> Result<String, AppError>;
}
