pub mod config;
pub mod control_plane;
pub mod installer;

pub use config::{Config, DEFAULT_SYSTEMCTL};
pub use control_plane::{ControlPlane, ControlRequest};
pub use installer::UnitInstaller;
