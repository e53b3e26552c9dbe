//! Type Converter Registry
//!
//! Resolution order for a required type:
//!
//! 1. converters registered at runtime with [`TypeConverterRegistry::register`]
//! 2. built-in entries in [`TEXT_CONVERTERS`], by name, alias, then last path segment
//! 3. the text itself as a `String`, when `fallback_to_text` is enabled

use crate::config::ConversionConfig;
use dashmap::DashMap;
use std::sync::Arc;
use wiring_domain::error::{Error, Result};
use wiring_domain::ports::TypeConverter;
use wiring_domain::{ObjectValue, TypeRef};

/// Conversion function shared by built-in and runtime converters
pub type ConvertFn = fn(&str) -> std::result::Result<ObjectValue, String>;

/// Registry entry for text converters
///
/// Each built-in converter submits one entry to [`TEXT_CONVERTERS`].
pub struct TextConverterEntry {
    /// Canonical type name (e.g., "i32", "duration")
    pub name: &'static str,
    /// Alternative spellings, including `std::any::type_name` forms
    pub aliases: &'static [&'static str],
    /// Human-readable description
    pub description: &'static str,
    /// Conversion function
    pub convert: ConvertFn,
}

#[linkme::distributed_slice]
pub static TEXT_CONVERTERS: [TextConverterEntry] = [..];

/// Find the built-in entry for a type name
pub fn resolve_converter(type_name: &str) -> Option<&'static TextConverterEntry> {
    let lookup = |name: &str| {
        TEXT_CONVERTERS
            .iter()
            .find(|entry| entry.name == name || entry.aliases.iter().any(|alias| *alias == name))
    };

    lookup(type_name).or_else(|| {
        type_name
            .rsplit_once("::")
            .and_then(|(_, last)| lookup(last))
    })
}

/// List all built-in converters as (name, description) pairs
pub fn list_converters() -> Vec<(&'static str, &'static str)> {
    let mut converters: Vec<_> = TEXT_CONVERTERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    converters.sort_unstable();
    converters
}

/// Text-to-typed-value converter with runtime overrides
pub struct TypeConverterRegistry {
    config: ConversionConfig,
    custom: DashMap<String, Arc<dyn Fn(&str) -> Result<ObjectValue> + Send + Sync>>,
}

impl Default for TypeConverterRegistry {
    fn default() -> Self {
        Self::new(ConversionConfig::default())
    }
}

impl TypeConverterRegistry {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            custom: DashMap::new(),
        }
    }

    /// Register (or replace) a converter for `type_name`; takes precedence over built-ins
    pub fn register<F>(&self, type_name: impl Into<String>, convert: F)
    where
        F: Fn(&str) -> Result<ObjectValue> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        tracing::debug!(type_name = %type_name, "Registering custom text converter");
        self.custom.insert(type_name, Arc::new(convert));
    }

    /// Remove a runtime converter; returns whether one was registered
    pub fn unregister(&self, type_name: &str) -> bool {
        self.custom.remove(type_name).is_some()
    }

    /// Whether some converter handles `type_name`
    pub fn supports(&self, type_name: &str) -> bool {
        self.custom.contains_key(type_name) || resolve_converter(type_name).is_some()
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}

impl TypeConverter for TypeConverterRegistry {
    fn convert(&self, text: &str, required_type: Option<&TypeRef>) -> Result<ObjectValue> {
        let text = if self.config.trim_whitespace {
            text.trim()
        } else {
            text
        };

        let Some(required_type) = required_type else {
            return Ok(Arc::new(text.to_string()));
        };
        let type_name = required_type.name();

        // Clone the Arc so the shard lock is released before converting
        let custom = self.custom.get(type_name).map(|entry| Arc::clone(entry.value()));
        if let Some(convert) = custom {
            return convert(text);
        }

        if let Some(entry) = resolve_converter(type_name) {
            return (entry.convert)(text)
                .map_err(|message| Error::conversion(text, type_name, message));
        }

        if self.config.fallback_to_text {
            tracing::debug!(type_name, "No converter registered; passing text through");
            return Ok(Arc::new(text.to_string()));
        }
        Err(Error::conversion(
            text,
            type_name,
            "no converter registered for this type",
        ))
    }
}

impl std::fmt::Debug for TypeConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeConverterRegistry")
            .field("config", &self.config)
            .field("custom", &self.custom.len())
            .finish()
    }
}
