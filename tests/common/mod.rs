//! Shared testing utilities for unitctl integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use unitctl::{Config, UnitDirs};

pub const UNIT_TEMPLATE: &str = "\
[Unit]
Description={{ Description }}

[Service]
WorkingDirectory={{ Cwd }}
ExecStart={{ Cwd }}/{{ Binary }}
Restart=on-failure

[Install]
WantedBy=multi-user.target
";

/// Isolated unit directories plus a scratch area for templates.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("system")).expect("Failed to create system dir");
        fs::create_dir_all(root.path().join("user")).expect("Failed to create user dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn system_dir(&self) -> PathBuf {
        self.root.path().join("system")
    }

    pub fn user_dir(&self) -> PathBuf {
        self.root.path().join("user")
    }

    pub fn unit_dirs(&self) -> UnitDirs {
        UnitDirs::new(self.system_dir(), self.user_dir())
    }

    pub fn config(&self) -> Config {
        Config::default().with_unit_dirs(self.unit_dirs())
    }

    /// Write a file under the scratch area and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn write_template(&self) -> PathBuf {
        self.write_file("unit.tpl", UNIT_TEMPLATE)
    }

    /// Names of all files present in a unit directory.
    pub fn installed_files(&self, dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("Failed to read unit dir")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Build a command for the compiled `unitctl` binary pointed at the test directories.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("unitctl").expect("Failed to locate unitctl binary");
        cmd.current_dir(self.root())
            .env_remove("RUST_LOG")
            .arg("--system-dir")
            .arg(self.system_dir())
            .arg("--user-dir")
            .arg(self.user_dir());
        cmd
    }
}

/// Shell-script stand-in for `systemctl` that records its arguments.
///
/// Each invocation appends one line to the log with every argument wrapped in
/// brackets, so empty arguments stay visible: `[enable][][foo]`.
pub struct FakeSystemctl {
    pub root: TempDir,
    pub program: PathBuf,
    pub log_file: PathBuf,
}

impl FakeSystemctl {
    /// A stand-in that succeeds for every request.
    pub fn new() -> Self {
        Self::with_body("exit 0")
    }

    /// A stand-in that fails with `code` and `stderr` when invoked with `verb`.
    pub fn failing_on(verb: &str, code: i32, stderr: &str) -> Self {
        Self::with_body(&format!(
            r#"if [ "$1" = "{verb}" ]; then
    echo "{stderr}" >&2
    exit {code}
fi
exit 0"#
        ))
    }

    fn with_body(body: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake systemctl");
        let program = root.path().join("systemctl");
        let log_file = root.path().join("systemctl.log");

        let script = format!(
            r#"#!/bin/sh
for arg in "$@"; do
    printf '[%s]' "$arg" >> "{log}"
done
echo >> "{log}"
{body}
"#,
            log = log_file.to_string_lossy()
        );

        fs::write(&program, script).expect("Failed to write fake systemctl");
        let mut perms = fs::metadata(&program).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&program, perms).expect("Failed to set permissions");

        Self { root, program, log_file }
    }

    pub fn program(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Recorded invocations, one entry per call.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
