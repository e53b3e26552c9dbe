//! # Domain Layer
//!
//! Pure data and port definitions for the initializer binding engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`value_objects`] | Injected values, parameter slots, routine identity |
//! | [`ports`] | Collaborator traits the binder and materializer call out to |
//! | [`constants`] | Shared defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
