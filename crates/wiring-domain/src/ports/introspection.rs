//! Parameter-name introspection port

use crate::value_objects::RoutineId;

/// Derives the ordered parameter names of a creation routine
pub trait ParameterNameIntrospector: Send + Sync {
    /// `None` when the routine's names cannot be derived from its identity
    fn parameter_names(&self, routine: &RoutineId) -> Option<Vec<String>>;
}
