use std::fmt;

/// Which service manager a unit belongs to.
///
/// Threaded identically through installation and control-plane calls for the
/// same unit; nothing persists or infers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// System-wide units managed by the system instance.
    #[default]
    System,
    /// Per-user units managed by the user instance.
    User,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::System, Scope::User];

    /// Flag token placed in control-plane argument lists.
    ///
    /// The system scope yields an empty placeholder rather than no argument.
    pub fn flag(&self) -> &'static str {
        match self {
            Scope::System => "",
            Scope::User => "--user",
        }
    }

    /// Map a `--user` style boolean onto a scope.
    pub fn from_user_flag(user: bool) -> Self {
        if user { Scope::User } else { Scope::System }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::System => "system",
            Scope::User => "user",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
