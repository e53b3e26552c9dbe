//! Naming-convention heuristic port

use crate::value_objects::RoutineId;

/// Guesses whether a creation routine is type-level (static) from its name
///
/// Consulted only when a descriptor's dispatch strategy is
/// [`DispatchKind::Guess`](crate::DispatchKind::Guess).
pub trait NamingHeuristic: Send + Sync {
    /// Returns `true` when the routine should be invoked on the type itself
    fn guess_type_level(&self, routine: &RoutineId) -> bool;
}

impl<F> NamingHeuristic for F
where
    F: Fn(&RoutineId) -> bool + Send + Sync,
{
    fn guess_type_level(&self, routine: &RoutineId) -> bool {
        self(routine)
    }
}
