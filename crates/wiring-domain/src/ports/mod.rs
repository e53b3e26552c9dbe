//! Collaborator ports
//!
//! Traits at the boundary of the binding core. Concrete implementations live
//! in the infrastructure crate; tests plug in closures or small fakes.

pub mod collection;
pub mod conversion;
pub mod definition;
pub mod introspection;
pub mod naming;
pub mod reference;

pub use collection::CollectionAssembler;
pub use conversion::TypeConverter;
pub use definition::ComponentDefinition;
pub use introspection::ParameterNameIntrospector;
pub use naming::NamingHeuristic;
pub use reference::ReferenceResolver;
