//! Domain constants

/// Component key reported when a binder has no owning definition
pub const DETACHED_COMPONENT_KEY: &str = "<detached>";

/// Prefix that marks instance-level creation routines by convention
pub const DEFAULT_INSTANCE_PREFIX: &str = "init";

/// Selector fragment separating a routine verb from its first parameter name
pub const SELECTOR_WITH_MARKER: &str = "With";
