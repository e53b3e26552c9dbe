use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a creation routine (constructor, factory method, selector)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineId(String);

impl RoutineId {
    /// Create a routine identity
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The routine name as written by the definition author
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoutineId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RoutineId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Whether a creation routine is invoked on the type or on an instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchKind {
    /// Defer to the naming-convention heuristic
    #[default]
    Guess,
    /// Type-level (static) factory
    Yes,
    /// Instance method
    No,
}
