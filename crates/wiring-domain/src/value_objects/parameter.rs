//! Parameter addressing

use super::injected_value::InjectedValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one formal parameter of a creation routine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    /// Declared parameter name
    Name(String),
    /// Zero-based position
    Index(usize),
}

impl ParameterKey {
    /// Address a parameter by name
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Address a parameter by position
    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

impl From<usize> for ParameterKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ParameterKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ParameterKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A bound parameter
///
/// Identity is immutable; the value is replaced on re-bind. `sequence` is the
/// declaration order of the most recent bind and decides which binding wins
/// when a by-name and a by-index binding land on the same canonical index.
#[derive(Debug, Clone)]
pub struct ParameterSlot {
    declared: ParameterKey,
    index: Option<usize>,
    name: Option<String>,
    value: InjectedValue,
    sequence: u64,
}

impl ParameterSlot {
    /// Slot created from a bind call
    pub fn new(key: ParameterKey, value: InjectedValue, sequence: u64) -> Self {
        let (index, name) = match &key {
            ParameterKey::Index(index) => (Some(*index), None),
            ParameterKey::Name(name) => (None, Some(name.clone())),
        };
        Self {
            declared: key,
            index,
            name,
            value,
            sequence,
        }
    }

    /// Record the other half of the identity once names are known
    pub fn with_identity(mut self, index: Option<usize>, name: Option<String>) -> Self {
        self.index = self.index.or(index);
        self.name = self.name.or(name);
        self
    }

    /// Replace the bound value (last write wins)
    pub fn rebind(&mut self, value: InjectedValue, sequence: u64) {
        self.value = value;
        self.sequence = sequence;
    }

    /// Address used by the bind call that created the slot
    pub fn key(&self) -> &ParameterKey {
        &self.declared
    }

    /// Canonical index, when known
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Declared name, when known
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The bound value
    pub fn value(&self) -> &InjectedValue {
        &self.value
    }

    /// Declaration order of the last bind
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Human-readable identity, e.g. `#1 'timeout'`
    pub fn identity(&self) -> String {
        match (self.index, &self.name) {
            (Some(index), Some(name)) => format!("#{index} '{name}'"),
            _ => self.declared.to_string(),
        }
    }
}
