//! Default collection assembly
//!
//! Runs a deferred builder against an empty [`CollectionValues`] and returns
//! whatever it produced. Builder failures are returned unmodified.

use wiring_domain::error::Result;
use wiring_domain::ports::CollectionAssembler;
use wiring_domain::{CollectionValues, DeferredBuilder, TypeRef};

/// Collection assembler that simply invokes the builder
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCollectionAssembler;

impl CollectionAssembler for DirectCollectionAssembler {
    fn assemble(
        &self,
        element_required_type: &TypeRef,
        build: &DeferredBuilder,
    ) -> Result<CollectionValues> {
        let mut values = CollectionValues::new(element_required_type.clone());
        build(&mut values)?;
        tracing::trace!(
            element_type = %element_required_type,
            elements = values.len(),
            "Collection assembled"
        );
        Ok(values)
    }
}
