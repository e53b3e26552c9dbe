//! Owning component definition port

use crate::value_objects::RoutineId;

/// The component definition that owns an initializer binder
///
/// Binders only ever hold a weak link to it (see
/// [`DefinitionLink`](crate::DefinitionLink)).
pub trait ComponentDefinition: Send + Sync {
    /// Registry key of the component
    fn key(&self) -> &str;

    /// Parameter names the definition learned after the binder was created
    fn parameter_names(&self, _routine: &RoutineId) -> Option<Vec<String>> {
        None
    }
}
