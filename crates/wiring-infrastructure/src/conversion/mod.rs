//! Text conversion
//!
//! Built-in converters register themselves in [`TEXT_CONVERTERS`] through a
//! `linkme` distributed slice; [`TypeConverterRegistry`] layers runtime
//! converters on top and implements the `TypeConverter` port.

mod builtin;
pub mod registry;

pub use registry::{
    ConvertFn, TEXT_CONVERTERS, TextConverterEntry, TypeConverterRegistry, list_converters,
    resolve_converter,
};
