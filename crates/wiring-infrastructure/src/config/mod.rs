//! Configuration
//!
//! Layered configuration: defaults, then a TOML file, then `WIRING__*`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ConversionConfig, LoggingConfig, NamingConfig, WiringConfig};
