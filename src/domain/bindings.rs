use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::AppError;

/// Binding the installer requires before rendering a template.
pub const CWD_KEY: &str = "Cwd";

/// Template variables supplied by the caller.
///
/// Keys are kept ordered so rendering sees the same context on every call.
/// Only `Cwd` is checked; every other binding is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings(BTreeMap<String, String>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a binding, returning the previous value if one existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Bindings) {
        self.0.extend(other.0);
    }

    /// Check that `Cwd` is present and non-empty.
    pub fn require_cwd(&self) -> Result<(), AppError> {
        match self.get(CWD_KEY) {
            Some(cwd) if !cwd.is_empty() => Ok(()),
            _ => Err(AppError::MissingRequiredBinding { key: CWD_KEY }),
        }
    }

    /// Parse a single `KEY=VALUE` pair. The value may be empty or contain `=`.
    pub fn parse_pair(pair: &str) -> Result<(String, String), AppError> {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            AppError::InvalidBinding(format!("'{pair}' is not in KEY=VALUE form"))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidBinding(format!("'{pair}' has an empty key")));
        }
        Ok((key.to_string(), value.to_string()))
    }

    /// Parse a flat TOML table of string values.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::InvalidBinding(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<HashMap<String, String>> for Bindings {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for Bindings {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self(value)
    }
}
