use std::path::Path;
use std::sync::OnceLock;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use tracing::debug;

use crate::domain::{AppError, Bindings};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
///
/// Printing or iterating an undefined variable is an error, while testing one
/// in `{% if %}` is false, so optional sections need no binding. Unknown
/// filters, tests, and functions are reported like syntax errors. A trailing
/// newline in the template is kept so rendered unit files end the way their
/// templates do. Bound values are inserted literally and never evaluated as
/// template source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(
        &self,
        template: &str,
        bindings: &Bindings,
        template_path: &Path,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
            env.set_keep_trailing_newline(true);
            env
        });

        let rendered = env.render_str(template, bindings).map_err(|err| match err.kind() {
            ErrorKind::SyntaxError
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction => AppError::template_load(template_path, err),
            _ => AppError::TemplateRender { path: template_path.to_path_buf(), source: err },
        })?;
        debug!(template = %template_path.display(), bytes = rendered.len(), "rendered template");
        Ok(rendered)
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
