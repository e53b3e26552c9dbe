//! Application Layer - Initializer Binding
//!
//! Turns a component definition's declared constructor arguments into an
//! ordered, positional argument list.
//!
//! ## Architecture
//!
//! The application layer:
//! - Holds the creation-routine descriptor and its memoized dispatch guess
//! - Owns the parameter binder that reconciles name- and index-based bindings
//! - Calls collaborators only through `wiring_domain::ports`
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `wiring-domain`: value objects, errors and ports
//! - `tracing` for structured diagnostics

pub mod collection;
pub mod initializer;

pub use collection::DirectCollectionAssembler;
pub use initializer::{CreationRoutineDescriptor, InitializerBinder};
