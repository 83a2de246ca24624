use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for unitctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unit name is empty.
    #[error("Invalid unit name '{0}': must not be empty")]
    InvalidUnitName(String),

    /// A binding the installer depends on is absent or empty.
    #[error("Key {key} expected in bindings")]
    MissingRequiredBinding { key: &'static str },

    /// Malformed binding input (KEY=VALUE pair or bindings file).
    #[error("Invalid binding: {0}")]
    InvalidBinding(String),

    /// Caller-supplied input file (bindings, unit content) could not be read.
    #[error("Error reading {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template file could not be read or parsed.
    #[error("Error loading template {}: {source}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Template parsed but rendering against the bindings failed.
    #[error("Error rendering template {}: {source}", path.display())]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// Unit file could not be created or written.
    #[error("Error writing unit file {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Control-plane executable could not be started.
    #[error(transparent)]
    Launch(io::Error),

    /// Control-plane executable ran and exited unsuccessfully.
    #[error("Error executing task {command} {args:?}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        args: Vec<String>,
        /// `None` when the process was terminated by a signal.
        code: Option<i32>,
        stderr: String,
    },
}

impl AppError {
    pub(crate) fn template_load<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        AppError::TemplateLoad { path: path.into(), source: source.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::InvalidUnitName(_)
            | AppError::MissingRequiredBinding { .. }
            | AppError::InvalidBinding(_)
            | AppError::TemplateRender { .. } => io::ErrorKind::InvalidInput,
            AppError::TemplateLoad { source, .. } => match source.downcast_ref::<io::Error>() {
                Some(err) => err.kind(),
                None => io::ErrorKind::InvalidData,
            },
            AppError::ReadInput { source, .. }
            | AppError::FileSystem { source, .. }
            | AppError::Launch(source) => source.kind(),
            AppError::CommandFailed { .. } => io::ErrorKind::Other,
        }
    }
}
