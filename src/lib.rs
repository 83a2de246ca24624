//! unitctl: render, install, and control systemd service units.
//!
//! Two independent pieces make up the crate: [`UnitInstaller`] writes
//! `<name>.service` files into the system or per-user unit directory, and
//! [`ControlPlane`] drives `systemctl` (`daemon-reload`, `enable`, `start`).
//! Callers compose them, typically as install, reload, enable, start.
//!
//! The free functions below use [`Config::default`]: `/lib/systemd/system`,
//! `/lib/systemd/user`, and `systemctl` from `PATH`. They act on the real
//! host; tests should build a [`UnitInstaller`] or [`ControlPlane`] with
//! `from_config` and temporary directories instead.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

pub use app::{Config, ControlPlane, ControlRequest, UnitInstaller};
pub use domain::{AppError, Bindings, Scope, UnitDirs, UnitName};

/// Render the template at `template_path` with `bindings` and install it as
/// `<name>.service` for `scope`.
///
/// `bindings` must contain a non-empty `Cwd`. Writes under `/lib/systemd`.
pub fn install_unit(
    name: &str,
    template_path: &Path,
    bindings: &Bindings,
    scope: Scope,
) -> Result<PathBuf, AppError> {
    UnitInstaller::from_config(&Config::default())
        .install_from_template(name, template_path, bindings, scope)
}

/// Install pre-rendered unit content as `<name>.service` for `scope`.
///
/// Writes under `/lib/systemd`; use [`UnitInstaller::from_config`] to target
/// other directories.
pub fn install_unit_file(name: &str, content: &[u8], scope: Scope) -> Result<PathBuf, AppError> {
    UnitInstaller::from_config(&Config::default()).install_raw(name, content, scope)
}

/// `systemctl enable [--user] <unit>`, with `systemctl` resolved from `PATH`.
pub fn enable(unit: &str, scope: Scope) -> Result<(), AppError> {
    ControlPlane::from_config(&Config::default()).enable(unit, scope)
}

/// `systemctl start [--user] <unit>`
pub fn start(unit: &str, scope: Scope) -> Result<(), AppError> {
    ControlPlane::from_config(&Config::default()).start(unit, scope)
}

/// `systemctl daemon-reload`
pub fn daemon_reload() -> Result<(), AppError> {
    ControlPlane::from_config(&Config::default()).daemon_reload()
}

/// Install a unit from a template, reload, enable, and start it.
///
/// Stops at the first failing step; earlier steps are not undone.
pub fn provision(
    config: &Config,
    name: &str,
    template_path: &Path,
    bindings: &Bindings,
    scope: Scope,
) -> Result<PathBuf, AppError> {
    let path = UnitInstaller::from_config(config)
        .install_from_template(name, template_path, bindings, scope)?;

    let control_plane = ControlPlane::from_config(config);
    control_plane.daemon_reload()?;
    control_plane.enable(name, scope)?;
    control_plane.start(name, scope)?;
    Ok(path)
}
