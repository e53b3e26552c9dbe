//! Domain Value Objects
//!
//! Data carriers passed between the binder and its collaborators.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`InjectedValue`] | One value to inject: reference, text, object or collection |
//! | [`ParameterKey`] | Parameter addressed by declared name or zero-based index |
//! | [`ParameterSlot`] | A bound parameter and its declaration order |
//! | [`ResolvedArguments`] | Ordered output of a resolution pass |
//! | [`RoutineId`] | Identity of the creation routine |
//! | [`DispatchKind`] | Tri-state type-level dispatch strategy |
//! | [`DefinitionLink`] | Weak back-reference to the owning definition |

/// Deferred collection values
pub mod collection;
/// Weak link to the owning definition
pub mod definition_link;
/// Injected value variants
pub mod injected_value;
/// Boxed object payloads and unwrap hints
pub mod object;
/// Parameter addressing and slots
pub mod parameter;
/// Resolution output and diagnostics
pub mod resolution;
/// Creation routine identity
pub mod routine;
/// Required-type references
pub mod type_ref;

pub use collection::{CollectionKind, CollectionValues, DeferredBuilder};
pub use definition_link::DefinitionLink;
pub use injected_value::{InjectedValue, ValueKind};
pub use object::{ObjectValue, ScalarKind, UnwrapHint};
pub use parameter::{ParameterKey, ParameterSlot};
pub use resolution::{ResolutionReport, ResolvedArguments, ResolvedParameter, SlotReport};
pub use routine::{DispatchKind, RoutineId};
pub use type_ref::TypeRef;
