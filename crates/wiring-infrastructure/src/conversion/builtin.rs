//! Built-in text converters

use super::registry::{TEXT_CONVERTERS, TextConverterEntry};
use crate::constants::{BOOL_FALSE_LITERALS, BOOL_TRUE_LITERALS};
use std::str::FromStr;
use std::sync::Arc;
use wiring_domain::ObjectValue;

fn parse_as<T>(text: &str) -> Result<ObjectValue, String>
where
    T: FromStr + Send + Sync + 'static,
    T::Err: std::fmt::Display,
{
    text.parse::<T>()
        .map(|value| Arc::new(value) as ObjectValue)
        .map_err(|e| e.to_string())
}

fn parse_bool(text: &str) -> Result<ObjectValue, String> {
    let is_any = |literals: &[&str]| literals.iter().any(|l| l.eq_ignore_ascii_case(text));
    if is_any(BOOL_TRUE_LITERALS) {
        Ok(Arc::new(true))
    } else if is_any(BOOL_FALSE_LITERALS) {
        Ok(Arc::new(false))
    } else {
        Err(format!("expected one of {BOOL_TRUE_LITERALS:?} or {BOOL_FALSE_LITERALS:?}"))
    }
}

fn parse_string(text: &str) -> Result<ObjectValue, String> {
    Ok(Arc::new(text.to_string()))
}

fn parse_duration(text: &str) -> Result<ObjectValue, String> {
    humantime::parse_duration(text)
        .map(|value| Arc::new(value) as ObjectValue)
        .map_err(|e| e.to_string())
}

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static BOOL_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "bool",
    aliases: &["BOOL", "boolean", "Bool"],
    description: "true/false, yes/no, on/off, 1/0",
    convert: parse_bool,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static I32_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "i32",
    aliases: &["int", "integer", "NSInteger"],
    description: "32-bit signed integer",
    convert: parse_as::<i32>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static I64_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "i64",
    aliases: &["long"],
    description: "64-bit signed integer",
    convert: parse_as::<i64>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static U32_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "u32",
    aliases: &["unsigned"],
    description: "32-bit unsigned integer",
    convert: parse_as::<u32>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static U64_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "u64",
    aliases: &[],
    description: "64-bit unsigned integer",
    convert: parse_as::<u64>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static USIZE_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "usize",
    aliases: &["NSUInteger"],
    description: "Pointer-sized unsigned integer",
    convert: parse_as::<usize>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static F32_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "f32",
    aliases: &["float"],
    description: "32-bit float",
    convert: parse_as::<f32>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static F64_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "f64",
    aliases: &["double", "CGFloat"],
    description: "64-bit float",
    convert: parse_as::<f64>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static CHAR_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "char",
    aliases: &[],
    description: "Single character",
    convert: parse_as::<char>,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static STRING_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "string",
    aliases: &["String", "str", "NSString", "alloc::string::String"],
    description: "Text passed through unchanged",
    convert: parse_string,
};

#[linkme::distributed_slice(TEXT_CONVERTERS)]
static DURATION_CONVERTER: TextConverterEntry = TextConverterEntry {
    name: "duration",
    aliases: &["Duration", "core::time::Duration", "std::time::Duration"],
    description: "Human-readable duration such as `30s` or `1h 15m`",
    convert: parse_duration,
};
