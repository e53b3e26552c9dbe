//! Argument materializer
//!
//! Turns [`ResolvedArguments`] into the concrete positional argument list for
//! the instantiation side:
//!
//! ```text
//! Reference      ──► ReferenceResolver  ──► Object
//! TextLiteral    ──► TypeConverter      ──► Object (unwrap hint recomputed)
//! ObjectInstance ──► passthrough        ──► Object (bind-time unwrap hint)
//! Collection     ──► elements, recursively ──► Collection
//! unbound index  ──────────────────────────► Missing
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::conversion::TypeConverterRegistry;
use wiring_application::{DirectCollectionAssembler, InitializerBinder};
use wiring_domain::error::Result;
use wiring_domain::ports::{CollectionAssembler, ReferenceResolver, TypeConverter};
use wiring_domain::{
    CollectionKind, CollectionValues, InjectedValue, ObjectValue, ResolvedArguments,
    ResolvedParameter, TypeRef, UnwrapHint,
};

/// One concrete argument
#[derive(Debug, Clone)]
pub struct Argument {
    /// Canonical index
    pub index: usize,
    /// Declared name, when known
    pub name: Option<String>,
    pub value: ArgumentValue,
}

/// Materialized argument payload
#[derive(Clone)]
pub enum ArgumentValue {
    /// A single value, with the unwrap decision for the target parameter
    Object {
        value: ObjectValue,
        unwrap: UnwrapHint,
    },
    /// Materialized collection elements
    Collection {
        kind: CollectionKind,
        elements: Vec<ArgumentValue>,
    },
    /// Nothing was bound; the instantiation side supplies a default
    Missing,
}

impl ArgumentValue {
    fn object(value: ObjectValue, unwrap: UnwrapHint) -> Self {
        Self::Object { value, unwrap }
    }

    /// Borrow an object payload as `T`
    pub fn downcast_ref<T: std::any::Any>(&self) -> Option<&T> {
        match self {
            Self::Object { value, .. } => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Collection elements, for collections
    pub fn elements(&self) -> Option<&[ArgumentValue]> {
        match self {
            Self::Collection { elements, .. } => Some(elements),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl std::fmt::Debug for ArgumentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object { unwrap, .. } => f
                .debug_struct("Object")
                .field("unwrap", unwrap)
                .finish_non_exhaustive(),
            Self::Collection { kind, elements } => f
                .debug_struct("Collection")
                .field("kind", kind)
                .field("elements", elements)
                .finish(),
            Self::Missing => f.write_str("Missing"),
        }
    }
}

/// Routes resolved values to their collaborators
#[derive(Clone)]
pub struct ArgumentMaterializer {
    references: Arc<dyn ReferenceResolver>,
    converter: Arc<dyn TypeConverter>,
    assembler: Arc<dyn CollectionAssembler>,
}

impl ArgumentMaterializer {
    /// Materializer with the default converter registry and direct assembly
    pub fn new(references: Arc<dyn ReferenceResolver>) -> Self {
        Self {
            references,
            converter: Arc::new(TypeConverterRegistry::default()),
            assembler: Arc::new(DirectCollectionAssembler),
        }
    }

    pub fn with_converter(mut self, converter: Arc<dyn TypeConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_collection_assembler(mut self, assembler: Arc<dyn CollectionAssembler>) -> Self {
        self.assembler = assembler;
        self
    }

    /// Resolve `binder` and materialize the result
    pub fn materialize_binder(&self, binder: &InitializerBinder) -> Result<Vec<Argument>> {
        let resolved = binder.resolve_all()?;
        self.materialize(&resolved)
    }

    /// Materialize every index up to the arity (or the highest bound index)
    ///
    /// # Errors
    ///
    /// Collaborator failures, wrapped in `Error::Parameter` with the
    /// component key and the identity of the failing slot.
    pub fn materialize(&self, resolved: &ResolvedArguments) -> Result<Vec<Argument>> {
        let len = resolved.arity().unwrap_or_else(|| {
            resolved
                .parameters()
                .last()
                .map_or(0, |parameter| parameter.index + 1)
        });

        let mut arguments = Vec::with_capacity(len);
        for index in 0..len {
            let argument = match resolved.get(index) {
                Some(parameter) => Argument {
                    index,
                    name: parameter.name.clone(),
                    value: self
                        .materialize_parameter(parameter)
                        .map_err(|e| e.for_parameter(resolved.component(), parameter.identity()))?,
                },
                None => {
                    tracing::trace!(
                        component = resolved.component(),
                        parameter = %resolved.identity_at(index),
                        "Parameter unbound; left to the instantiation default"
                    );
                    Argument {
                        index,
                        name: resolved.name_at(index).map(str::to_string),
                        value: ArgumentValue::Missing,
                    }
                }
            };
            arguments.push(argument);
        }

        tracing::debug!(
            component = resolved.component(),
            arguments = arguments.len(),
            missing = resolved.unbound().len(),
            "Arguments materialized"
        );
        Ok(arguments)
    }

    fn materialize_parameter(&self, parameter: &ResolvedParameter) -> Result<ArgumentValue> {
        match (&parameter.value, &parameter.collection) {
            // Reuse the elements assembled during this resolution pass
            (InjectedValue::Collection { .. }, Some(values)) => self.materialize_collection(values),
            (value, _) => self.materialize_value(value, None),
        }
    }

    fn materialize_value(
        &self,
        value: &InjectedValue,
        element_type: Option<&TypeRef>,
    ) -> Result<ArgumentValue> {
        match value {
            InjectedValue::Reference { target } => {
                let component = self.references.resolve_reference(target)?;
                Ok(ArgumentValue::object(component, UnwrapHint::None))
            }
            InjectedValue::TextLiteral {
                text,
                required_type,
            } => {
                let converted = self
                    .converter
                    .convert(text, required_type.as_ref().or(element_type))?;
                let unwrap = UnwrapHint::for_value(&converted);
                Ok(ArgumentValue::object(converted, unwrap))
            }
            InjectedValue::ObjectInstance { value, unwrap, .. } => {
                Ok(ArgumentValue::object(Arc::clone(value), *unwrap))
            }
            InjectedValue::Collection {
                element_required_type,
                build,
            } => {
                let values = self.assembler.assemble(element_required_type, build)?;
                self.materialize_collection(&values)
            }
        }
    }

    fn materialize_collection(&self, values: &CollectionValues) -> Result<ArgumentValue> {
        let element_type = values.element_required_type();
        let mut seen = HashSet::new();

        let mut elements = Vec::with_capacity(values.len());
        for value in values.values() {
            if values.kind() == CollectionKind::Unordered {
                if let Some(identity) = element_identity(value, element_type) {
                    if !seen.insert(identity) {
                        continue;
                    }
                }
            }
            elements.push(self.materialize_value(value, Some(element_type))?);
        }

        Ok(ArgumentValue::Collection {
            kind: values.kind(),
            elements,
        })
    }
}

/// Identity used to deduplicate unordered collections
fn element_identity(value: &InjectedValue, element_type: &TypeRef) -> Option<String> {
    match value {
        InjectedValue::Reference { target } => Some(format!("ref:{target}")),
        InjectedValue::TextLiteral {
            text,
            required_type,
        } => {
            let ty = required_type.as_ref().unwrap_or(element_type);
            Some(format!("text:{ty}:{text}"))
        }
        _ => None,
    }
}

impl std::fmt::Debug for ArgumentMaterializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentMaterializer").finish_non_exhaustive()
    }
}
