//! Creation Routine Descriptor
//!
//! Identity, parameter names and dispatch strategy of the routine used to
//! instantiate a component.
//!
//! ## Dispatch resolution
//!
//! | Strategy | Result |
//! |----------|--------|
//! | `Yes` | type-level |
//! | `No` | instance-level |
//! | `Guess` | naming heuristic, computed once and memoized |
//!
//! The memo is an atomic written with compare-and-swap, so concurrent
//! resolutions may both compute the guess but only one value is ever stored.

use std::sync::atomic::{AtomicU8, Ordering};
use wiring_domain::ports::NamingHeuristic;
use wiring_domain::{DispatchKind, RoutineId};

const GUESS_PENDING: u8 = 0;
const GUESS_INSTANCE: u8 = 1;
const GUESS_TYPE_LEVEL: u8 = 2;

/// Describes the creation routine of a component
#[derive(Debug)]
pub struct CreationRoutineDescriptor {
    routine: RoutineId,
    parameter_names: Vec<String>,
    strategy: DispatchKind,
    guess: AtomicU8,
}

impl CreationRoutineDescriptor {
    /// Descriptor that guesses its dispatch kind from the routine name
    pub fn new(routine: impl Into<RoutineId>) -> Self {
        Self::with_strategy(routine, DispatchKind::Guess)
    }

    /// Descriptor with an explicit dispatch strategy
    pub fn with_strategy(routine: impl Into<RoutineId>, strategy: DispatchKind) -> Self {
        Self {
            routine: routine.into(),
            parameter_names: Vec::new(),
            strategy,
            guess: AtomicU8::new(GUESS_PENDING),
        }
    }

    /// Builder form of [`set_parameter_names`](Self::set_parameter_names)
    pub fn with_parameter_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_parameter_names(names);
        self
    }

    /// Supply the routine's ordered parameter names
    pub fn set_parameter_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_names = names.into_iter().map(Into::into).collect();
    }

    /// Replace the routine; names and the memoized guess are discarded
    pub fn set_routine(&mut self, routine: impl Into<RoutineId>) {
        self.routine = routine.into();
        self.parameter_names.clear();
        self.guess.store(GUESS_PENDING, Ordering::Release);
    }

    /// Change the dispatch strategy
    pub fn set_strategy(&mut self, strategy: DispatchKind) {
        self.strategy = strategy;
    }

    pub fn routine(&self) -> &RoutineId {
        &self.routine
    }

    pub fn strategy(&self) -> DispatchKind {
        self.strategy
    }

    /// Ordered parameter names; empty when not introspectable yet
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    pub fn has_parameter_names(&self) -> bool {
        !self.parameter_names.is_empty()
    }

    /// Number of parameters, when the names are known
    pub fn arity(&self) -> Option<usize> {
        self.has_parameter_names()
            .then_some(self.parameter_names.len())
    }

    /// Canonical index of a declared name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.parameter_names.iter().position(|n| n == name)
    }

    /// Declared name at a canonical index
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.parameter_names.get(index).map(String::as_str)
    }

    /// Whether the routine is invoked on the type rather than an instance
    pub fn is_type_level(&self, heuristic: &dyn NamingHeuristic) -> bool {
        match self.strategy {
            DispatchKind::Yes => true,
            DispatchKind::No => false,
            DispatchKind::Guess => self.memoized_guess(heuristic),
        }
    }

    fn memoized_guess(&self, heuristic: &dyn NamingHeuristic) -> bool {
        match self.guess.load(Ordering::Acquire) {
            GUESS_TYPE_LEVEL => return true,
            GUESS_INSTANCE => return false,
            _ => {}
        }

        let computed = if heuristic.guess_type_level(&self.routine) {
            GUESS_TYPE_LEVEL
        } else {
            GUESS_INSTANCE
        };
        tracing::debug!(
            routine = %self.routine,
            type_level = computed == GUESS_TYPE_LEVEL,
            "Dispatch kind guessed from routine name"
        );

        let stored = match self.guess.compare_exchange(
            GUESS_PENDING,
            computed,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => computed,
            Err(existing) => existing,
        };
        stored == GUESS_TYPE_LEVEL
    }
}

impl Clone for CreationRoutineDescriptor {
    fn clone(&self) -> Self {
        Self {
            routine: self.routine.clone(),
            parameter_names: self.parameter_names.clone(),
            strategy: self.strategy,
            guess: AtomicU8::new(self.guess.load(Ordering::Acquire)),
        }
    }
}
