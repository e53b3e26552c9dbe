//! Collection assembly port

use crate::error::Result;
use crate::value_objects::{CollectionValues, DeferredBuilder, TypeRef};

/// Runs a deferred collection builder and hands back its elements
///
/// Called once per resolution pass for every collection binding; results are
/// never cached by the caller.
pub trait CollectionAssembler: Send + Sync {
    /// Invoke `build` and return the collected values
    fn assemble(
        &self,
        element_required_type: &TypeRef,
        build: &DeferredBuilder,
    ) -> Result<CollectionValues>;
}
