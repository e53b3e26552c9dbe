//! Deferred collection values

use super::injected_value::InjectedValue;
use super::object::ObjectValue;
use super::type_ref::TypeRef;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;

/// Builder callback stored in [`InjectedValue::Collection`]
///
/// Receives an empty [`CollectionValues`] and fills it. Invoked once per
/// resolution pass, never memoized: contents may legitimately change between
/// passes.
pub type DeferredBuilder = Arc<dyn Fn(&mut CollectionValues) -> Result<()> + Send + Sync>;

/// Whether element order is significant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    #[default]
    Ordered,
    Unordered,
}

/// Elements produced by a deferred builder
///
/// Each element is itself an [`InjectedValue`] and is resolved the same way
/// a top-level parameter value is, including nested collections.
#[derive(Debug, Clone)]
pub struct CollectionValues {
    kind: CollectionKind,
    element_required_type: TypeRef,
    values: Vec<InjectedValue>,
}

impl CollectionValues {
    /// Empty ordered collection of `element_required_type`
    pub fn new(element_required_type: TypeRef) -> Self {
        Self {
            kind: CollectionKind::Ordered,
            element_required_type,
            values: Vec::new(),
        }
    }

    /// Mark the collection as unordered (set semantics)
    pub fn set_kind(&mut self, kind: CollectionKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Add a reference to another component
    pub fn add_reference(&mut self, target: impl Into<String>) -> &mut Self {
        self.add(InjectedValue::reference(target))
    }

    /// Add a text literal converted to the element type
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add(InjectedValue::text(text))
    }

    /// Add a text literal converted to an explicit type
    pub fn add_text_as(
        &mut self,
        text: impl Into<String>,
        required_type: impl Into<TypeRef>,
    ) -> &mut Self {
        self.add(InjectedValue::text_as(text, required_type))
    }

    /// Add an object instance
    pub fn add_object<T: Any + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.add(InjectedValue::object(value))
    }

    /// Add an already shared object instance
    pub fn add_shared_object(&mut self, value: ObjectValue) -> &mut Self {
        self.add(InjectedValue::shared_object(value, None))
    }

    /// Add a nested collection
    pub fn add_collection<F>(&mut self, element_required_type: impl Into<TypeRef>, build: F) -> &mut Self
    where
        F: Fn(&mut CollectionValues) -> Result<()> + Send + Sync + 'static,
    {
        self.add(InjectedValue::collection(element_required_type, build))
    }

    /// Add any injected value
    pub fn add(&mut self, value: InjectedValue) -> &mut Self {
        self.values.push(value);
        self
    }

    /// Ordered or unordered
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Default element type
    pub fn element_required_type(&self) -> &TypeRef {
        &self.element_required_type
    }

    /// Elements in insertion order
    pub fn values(&self) -> &[InjectedValue] {
        &self.values
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the builder added nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume into elements
    pub fn into_values(self) -> Vec<InjectedValue> {
        self.values
    }
}
