use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::ports::{CommandOutput, CommandRunner};

/// Runs commands as child processes, capturing their output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        debug!(program, ?args, "running command");

        let output = Command::new(program).args(args).stdin(Stdio::null()).output()?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(program, code = ?result.code, "command finished");
        Ok(result)
    }
}
