//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `wiring_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wiring.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wiring";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIRING";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WIRING_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wiring";

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

/// Text values accepted as boolean true
pub const BOOL_TRUE_LITERALS: &[&str] = &["true", "yes", "1", "on"];

/// Text values accepted as boolean false
pub const BOOL_FALSE_LITERALS: &[&str] = &["false", "no", "0", "off"];
