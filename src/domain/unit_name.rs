use std::fmt;

use super::AppError;

/// Suffix appended to every installed unit file name.
pub const SERVICE_SUFFIX: &str = ".service";

/// A service unit name without its type suffix.
///
/// Guarantees:
/// - Non-empty
///
/// Nothing else is checked against init-system naming rules. A name that already
/// ends in `.service` is kept as-is, so its file name carries the suffix twice
/// (`foo.service.service`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitName(String);

impl UnitName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.is_empty() {
            return Err(AppError::InvalidUnitName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name written to the unit directory.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.0, SERVICE_SUFFIX)
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UnitName> for String {
    fn from(val: UnitName) -> Self {
        val.0
    }
}
