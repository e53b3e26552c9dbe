//! Reference resolution port

use crate::error::Result;
use crate::value_objects::ObjectValue;

/// Turns a component key into a live component instance
pub trait ReferenceResolver: Send + Sync {
    /// Resolve `identifier`, failing with [`Error::ReferenceNotFound`](crate::Error::ReferenceNotFound)
    /// when nothing is registered under it
    fn resolve_reference(&self, identifier: &str) -> Result<ObjectValue>;
}
