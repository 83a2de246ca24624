//! Control-plane invocation: `systemctl` requests and outcome classification.
//!
//! Every request is a single blocking invocation. There are no retries, no
//! timeouts, and no cached unit state; sequencing install, reload, enable and
//! start is left to the caller.

use tracing::debug;

use crate::adapters::ProcessCommandRunner;
use crate::app::Config;
use crate::domain::{AppError, Scope};
use crate::ports::CommandRunner;

/// A single control-plane operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest<'a> {
    Enable { unit: &'a str, scope: Scope },
    Start { unit: &'a str, scope: Scope },
    /// Reload unit definitions. Always addresses the system manager.
    DaemonReload,
}

impl ControlRequest<'_> {
    /// Operation verb passed as the first argument.
    pub fn verb(&self) -> &'static str {
        match self {
            ControlRequest::Enable { .. } => "enable",
            ControlRequest::Start { .. } => "start",
            ControlRequest::DaemonReload => "daemon-reload",
        }
    }

    /// Argument list for this request.
    ///
    /// Unit operations always carry three arguments; the scope slot holds an
    /// empty string for system units.
    pub fn args(&self) -> Vec<String> {
        match *self {
            ControlRequest::Enable { unit, scope } | ControlRequest::Start { unit, scope } => {
                vec![self.verb().to_string(), scope.flag().to_string(), unit.to_string()]
            }
            ControlRequest::DaemonReload => vec![self.verb().to_string()],
        }
    }
}

/// Issues control-plane requests through a [`CommandRunner`].
pub struct ControlPlane<R: CommandRunner> {
    runner: R,
    program: String,
}

impl ControlPlane<ProcessCommandRunner> {
    /// Control plane running the configured executable as a child process.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ProcessCommandRunner::new(), config.systemctl.clone())
    }
}

impl<R: CommandRunner> ControlPlane<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self { runner, program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn enable(&self, unit: &str, scope: Scope) -> Result<(), AppError> {
        self.execute(ControlRequest::Enable { unit, scope })
    }

    pub fn start(&self, unit: &str, scope: Scope) -> Result<(), AppError> {
        self.execute(ControlRequest::Start { unit, scope })
    }

    pub fn daemon_reload(&self) -> Result<(), AppError> {
        self.execute(ControlRequest::DaemonReload)
    }

    /// Run `request` once and classify the outcome.
    ///
    /// A launch failure is returned as [`AppError::Launch`] with the original
    /// I/O error. Any exit other than zero becomes [`AppError::CommandFailed`].
    pub fn execute(&self, request: ControlRequest<'_>) -> Result<(), AppError> {
        let args = request.args();
        debug!(program = %self.program, ?args, "invoking control plane");

        let output = self.runner.run(&self.program, &args).map_err(AppError::Launch)?;

        if !output.success() {
            return Err(AppError::CommandFailed {
                command: self.program.clone(),
                args,
                code: output.code,
                stderr: output.stderr,
            });
        }

        Ok(())
    }
}
