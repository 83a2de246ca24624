use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use crate::ports::{CommandOutput, CommandRunner};

enum Scripted {
    Output(CommandOutput),
    LaunchError(io::ErrorKind, String),
}

/// Records invocations and replays scripted outcomes.
///
/// With nothing scripted, every run exits 0 with empty output.
#[derive(Default)]
pub struct FakeCommandRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    scripted: Mutex<VecDeque<Scripted>>,
}

#[allow(dead_code)]
impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_output(&self, output: CommandOutput) {
        self.scripted.lock().unwrap().push_back(Scripted::Output(output));
    }

    pub fn push_launch_error(&self, kind: io::ErrorKind, message: &str) {
        self.scripted.lock().unwrap().push_back(Scripted::LaunchError(kind, message.to_string()));
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_args(&self) -> Option<Vec<String>> {
        self.calls.lock().unwrap().last().map(|(_, args)| args.clone())
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.calls.lock().unwrap().push((program.to_string(), args.to_vec()));

        match self.scripted.lock().unwrap().pop_front() {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::LaunchError(kind, message)) => Err(io::Error::new(kind, message)),
            None => Ok(CommandOutput { code: Some(0), ..CommandOutput::default() }),
        }
    }
}
