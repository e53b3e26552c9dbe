//! # Infrastructure Layer
//!
//! Cross-cutting concerns and default collaborators for the initializer
//! binding engine.
//!
//! ## Module Categories
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extension for foreign errors |
//!
//! ### Collaborators
//! | Module | Description |
//! |--------|-------------|
//! | [`naming`] | Naming-convention dispatch heuristic |
//! | [`introspection`] | Parameter names from routine signatures |
//! | [`conversion`] | Text-to-typed-value converter registry |
//! | [`references`] | In-memory component registry for references |
//! | [`materializer`] | Resolved bindings to positional arguments |
//! | [`di`] | Binder factory wiring everything from configuration |

pub mod config;
pub mod constants;
pub mod conversion;
pub mod di;
pub mod error_ext;
pub mod introspection;
pub mod logging;
pub mod materializer;
pub mod naming;
pub mod references;

pub use config::{ConfigLoader, WiringConfig};
pub use di::BinderFactory;
pub use error_ext::ErrorContext;
pub use materializer::{Argument, ArgumentMaterializer, ArgumentValue};
