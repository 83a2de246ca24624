pub mod bindings;
pub mod error;
pub mod scope;
pub mod unit_dirs;
pub mod unit_name;

pub use bindings::{Bindings, CWD_KEY};
pub use error::AppError;
pub use scope::Scope;
pub use unit_dirs::{SYSTEM_UNIT_DIR, USER_UNIT_DIR, UnitDirs};
pub use unit_name::{SERVICE_SUFFIX, UnitName};
