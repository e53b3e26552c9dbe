//! Binder wiring
//!
//! Builds binders and materializers whose collaborators come from
//! [`WiringConfig`](crate::config::WiringConfig).
//!
//! ```text
//! WiringConfig ──► BinderFactory ──┬─► InitializerBinder   (heuristic, assembler, introspected names)
//!                                  └─► ArgumentMaterializer (converter registry, assembler, references)
//! ```

pub mod factory;

pub use factory::BinderFactory;
