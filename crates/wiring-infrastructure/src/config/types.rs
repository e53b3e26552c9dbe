//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wiring_domain::DispatchKind;
use wiring_domain::constants::DEFAULT_INSTANCE_PREFIX;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Dispatch-kind naming conventions
    pub naming: NamingConfig,
    /// Text conversion behaviour
    pub conversion: ConversionConfig,
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

// ============================================================================
// Naming Configuration
// ============================================================================

/// Naming conventions used to guess type-level vs instance dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Routine name prefixes that mark instance-level routines
    pub instance_prefixes: Vec<String>,
    /// Strategy for descriptors created by the binder factory
    pub default_dispatch: DispatchKind,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            instance_prefixes: vec![DEFAULT_INSTANCE_PREFIX.to_string()],
            default_dispatch: DispatchKind::Guess,
        }
    }
}

// ============================================================================
// Conversion Configuration
// ============================================================================

/// Text-to-typed-value conversion behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Trim surrounding whitespace before converting
    pub trim_whitespace: bool,
    /// Pass the text through as a `String` when no converter matches
    pub fallback_to_text: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            fallback_to_text: true,
        }
    }
}
