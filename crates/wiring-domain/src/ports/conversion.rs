//! Text-to-typed-value conversion port

use crate::error::Result;
use crate::value_objects::{ObjectValue, TypeRef};

/// Converts literal text into a typed value
pub trait TypeConverter: Send + Sync {
    /// Convert `text`, targeting `required_type` when one is given
    fn convert(&self, text: &str, required_type: Option<&TypeRef>) -> Result<ObjectValue>;
}
