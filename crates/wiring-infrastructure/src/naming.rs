//! Prefix-based naming heuristic
//!
//! A routine is instance-level when its identity starts with one of the
//! configured prefixes (`init` by default); anything else is treated as a
//! type-level factory.

use crate::config::NamingConfig;
use wiring_domain::RoutineId;
use wiring_domain::constants::DEFAULT_INSTANCE_PREFIX;
use wiring_domain::ports::NamingHeuristic;

/// Naming heuristic driven by instance-routine prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixNamingHeuristic {
    instance_prefixes: Vec<String>,
}

impl Default for PrefixNamingHeuristic {
    fn default() -> Self {
        Self::new([DEFAULT_INSTANCE_PREFIX])
    }
}

impl PrefixNamingHeuristic {
    /// Heuristic recognising the given instance prefixes
    pub fn new<I, S>(instance_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instance_prefixes: instance_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Heuristic from the `[naming]` configuration section
    pub fn from_config(config: &NamingConfig) -> Self {
        Self::new(config.instance_prefixes.iter().cloned())
    }

    pub fn instance_prefixes(&self) -> &[String] {
        &self.instance_prefixes
    }
}

impl NamingHeuristic for PrefixNamingHeuristic {
    fn guess_type_level(&self, routine: &RoutineId) -> bool {
        !self
            .instance_prefixes
            .iter()
            .any(|prefix| routine.as_str().starts_with(prefix.as_str()))
    }
}
