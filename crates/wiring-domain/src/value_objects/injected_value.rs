//! Injected value variants

use super::collection::{CollectionValues, DeferredBuilder};
use super::object::{ObjectValue, UnwrapHint};
use super::type_ref::TypeRef;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// One concrete value to supply to a creation-routine parameter
///
/// Construction never fails. Re-binding a slot replaces its value outright;
/// values are never merged.
#[derive(Clone)]
pub enum InjectedValue {
    /// Another managed component, looked up by key at resolution time
    Reference {
        /// Key of the referenced component definition
        target: String,
    },
    /// Literal text handed to the type-conversion registry
    TextLiteral {
        /// The literal
        text: String,
        /// Target type, when the parameter type alone is ambiguous
        required_type: Option<TypeRef>,
    },
    /// A value already in (near-)final form
    ObjectInstance {
        /// The payload
        value: ObjectValue,
        /// Declared target type, if any
        required_type: Option<TypeRef>,
        /// Unwrap decision computed at bind time
        unwrap: UnwrapHint,
    },
    /// Elements produced lazily by a builder at resolution time
    Collection {
        /// Type every element converts to unless it says otherwise
        element_required_type: TypeRef,
        /// Deferred builder, invoked once per resolution pass
        build: DeferredBuilder,
    },
}

/// Discriminant of [`InjectedValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Reference,
    TextLiteral,
    ObjectInstance,
    Collection,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reference => "reference",
            Self::TextLiteral => "text",
            Self::ObjectInstance => "object",
            Self::Collection => "collection",
        };
        f.write_str(name)
    }
}

impl InjectedValue {
    /// Reference to another component definition
    pub fn reference(target: impl Into<String>) -> Self {
        Self::Reference {
            target: target.into(),
        }
    }

    /// Text literal converted according to the parameter's type
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextLiteral {
            text: text.into(),
            required_type: None,
        }
    }

    /// Text literal converted to `required_type`
    pub fn text_as(text: impl Into<String>, required_type: impl Into<TypeRef>) -> Self {
        Self::TextLiteral {
            text: text.into(),
            required_type: Some(required_type.into()),
        }
    }

    /// Object instance; boxed scalars are flagged for unwrapping
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::shared_object(Arc::new(value), None)
    }

    /// Already shared object instance with an optional declared type
    pub fn shared_object(value: ObjectValue, required_type: Option<TypeRef>) -> Self {
        let unwrap = UnwrapHint::for_value(&value);
        Self::ObjectInstance {
            value,
            required_type,
            unwrap,
        }
    }

    /// Struct payload that must be unwrapped into a struct-typed parameter
    pub fn boxed_struct<T: Any + Send + Sync>(value: T) -> Self {
        Self::ObjectInstance {
            value: Arc::new(value),
            required_type: Some(TypeRef::of::<T>()),
            unwrap: UnwrapHint::Struct,
        }
    }

    /// Collection whose elements come from `build` at resolution time
    pub fn collection<F>(element_required_type: impl Into<TypeRef>, build: F) -> Self
    where
        F: Fn(&mut CollectionValues) -> Result<()> + Send + Sync + 'static,
    {
        Self::Collection {
            element_required_type: element_required_type.into(),
            build: Arc::new(build),
        }
    }

    /// The variant discriminant
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Reference { .. } => ValueKind::Reference,
            Self::TextLiteral { .. } => ValueKind::TextLiteral,
            Self::ObjectInstance { .. } => ValueKind::ObjectInstance,
            Self::Collection { .. } => ValueKind::Collection,
        }
    }

    /// Referenced component key, for references
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference { target } => Some(target),
            _ => None,
        }
    }

    /// Literal text and its required type, for text literals
    pub fn as_text(&self) -> Option<(&str, Option<&TypeRef>)> {
        match self {
            Self::TextLiteral {
                text,
                required_type,
            } => Some((text, required_type.as_ref())),
            _ => None,
        }
    }

    /// Borrow the object payload as `T`
    pub fn downcast_object<T: Any>(&self) -> Option<&T> {
        match self {
            Self::ObjectInstance { value, .. } => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Unwrap hint recorded at bind time (`None` for non-object variants)
    pub fn unwrap_hint(&self) -> UnwrapHint {
        match self {
            Self::ObjectInstance { unwrap, .. } => *unwrap,
            _ => UnwrapHint::None,
        }
    }

    /// Short human-readable description used in logs and reports
    pub fn describe(&self) -> String {
        match self {
            Self::Reference { target } => format!("ref({target})"),
            Self::TextLiteral {
                text,
                required_type: Some(ty),
            } => format!("text({text:?} as {ty})"),
            Self::TextLiteral { text, .. } => format!("text({text:?})"),
            Self::ObjectInstance { unwrap, .. } if unwrap.needs_unwrap() => {
                format!("object(boxed {unwrap:?})")
            }
            Self::ObjectInstance { .. } => "object".to_string(),
            Self::Collection {
                element_required_type,
                ..
            } => format!("collection<{element_required_type}>"),
        }
    }
}

impl fmt::Debug for InjectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference { target } => f.debug_struct("Reference").field("target", target).finish(),
            Self::TextLiteral {
                text,
                required_type,
            } => f
                .debug_struct("TextLiteral")
                .field("text", text)
                .field("required_type", required_type)
                .finish(),
            Self::ObjectInstance {
                required_type,
                unwrap,
                ..
            } => f
                .debug_struct("ObjectInstance")
                .field("required_type", required_type)
                .field("unwrap", unwrap)
                .finish_non_exhaustive(),
            Self::Collection {
                element_required_type,
                ..
            } => f
                .debug_struct("Collection")
                .field("element_required_type", element_required_type)
                .finish_non_exhaustive(),
        }
    }
}
