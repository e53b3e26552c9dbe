//! Boxed object payloads
//!
//! Object instances travel as type-erased `Arc`s. When the payload is a boxed
//! scalar (or an explicitly boxed struct) the binder records an
//! [`UnwrapHint`] once, at bind time, so the instantiation side can unwrap it
//! against the target parameter without inspecting the value again.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;

/// Type-erased, shareable object payload
pub type ObjectValue = Arc<dyn Any + Send + Sync>;

/// Scalar types recognised as boxed scalars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl ScalarKind {
    /// Detect the scalar kind of a payload, if it is one
    pub fn detect(value: &(dyn Any + Send + Sync)) -> Option<Self> {
        macro_rules! probe {
            ($($ty:ty => $kind:ident),* $(,)?) => {
                $(if value.is::<$ty>() {
                    return Some(Self::$kind);
                })*
            };
        }

        probe!(
            bool => Bool,
            char => Char,
            i8 => I8,
            i16 => I16,
            i32 => I32,
            i64 => I64,
            isize => Isize,
            u8 => U8,
            u16 => U16,
            u32 => U32,
            u64 => U64,
            usize => Usize,
            f32 => F32,
            f64 => F64,
        );
        None
    }
}

/// How the instantiation collaborator should treat an object payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnwrapHint {
    /// Pass the object through as-is
    #[default]
    None,
    /// Boxed scalar, unwrap to the parameter's scalar type
    Scalar(ScalarKind),
    /// Boxed struct, unwrap to the parameter's struct type
    Struct,
}

impl UnwrapHint {
    /// Compute the hint from the runtime type of `value`
    pub fn for_value(value: &ObjectValue) -> Self {
        ScalarKind::detect(value.as_ref()).map_or(Self::None, Self::Scalar)
    }

    /// Whether the payload needs unwrapping at all
    pub fn needs_unwrap(self) -> bool {
        !matches!(self, Self::None)
    }
}
