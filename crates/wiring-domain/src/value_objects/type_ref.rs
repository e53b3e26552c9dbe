use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the type a literal or element must be converted to
///
/// Kept as an opaque string so configuration files and converter registries
/// can refer to types without compile-time knowledge of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Create a type reference from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Type reference for a Rust type, using its full path
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    /// The type name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}
