//! Direct collection assembler tests

use std::sync::Arc;

use wiring_application::DirectCollectionAssembler;
use wiring_domain::ports::CollectionAssembler;
use wiring_domain::{CollectionKind, CollectionValues, DeferredBuilder, Error, TypeRef, ValueKind};

#[test]
fn test_assembles_builder_output() {
    let build: DeferredBuilder = Arc::new(|values: &mut CollectionValues| {
        values
            .set_kind(CollectionKind::Unordered)
            .add_reference("a")
            .add_text_as("2", "int")
            .add_object(3u8);
        Ok(())
    });

    let values = DirectCollectionAssembler
        .assemble(&TypeRef::new("any"), &build)
        .unwrap();

    assert_eq!(values.kind(), CollectionKind::Unordered);
    assert_eq!(values.element_required_type().name(), "any");
    let kinds: Vec<ValueKind> = values.values().iter().map(|v| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![ValueKind::Reference, ValueKind::TextLiteral, ValueKind::ObjectInstance]
    );
}

#[test]
fn test_builder_error_passes_through_unmodified() {
    let build: DeferredBuilder =
        Arc::new(|_values: &mut CollectionValues| Err(Error::reference_not_found("missing")));

    let err = DirectCollectionAssembler
        .assemble(&TypeRef::new("any"), &build)
        .unwrap_err();

    assert!(matches!(err, Error::ReferenceNotFound { identifier } if identifier == "missing"));
}
