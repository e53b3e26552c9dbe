//! Weak link from a binder to its owning definition

use crate::constants::DETACHED_COMPONENT_KEY;
use crate::ports::ComponentDefinition;
use std::fmt;
use std::sync::{Arc, Weak};

/// Non-owning back-reference to the component definition
///
/// The component key is captured when the link is made so errors keep their
/// context even if the definition has already been dropped.
#[derive(Clone, Default)]
pub struct DefinitionLink {
    key: Option<String>,
    definition: Option<Weak<dyn ComponentDefinition>>,
}

impl DefinitionLink {
    /// Link to a live definition
    pub fn to(definition: &Arc<dyn ComponentDefinition>) -> Self {
        Self {
            key: Some(definition.key().to_string()),
            definition: Some(Arc::downgrade(definition)),
        }
    }

    /// Link carrying only a key, for binders built outside a registry
    pub fn detached(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            definition: None,
        }
    }

    /// Component key used in diagnostics
    pub fn component_key(&self) -> &str {
        self.key.as_deref().unwrap_or(DETACHED_COMPONENT_KEY)
    }

    /// The definition, if it is still alive
    pub fn upgrade(&self) -> Option<Arc<dyn ComponentDefinition>> {
        self.definition.as_ref().and_then(Weak::upgrade)
    }

    /// Whether a live definition is reachable through the link
    pub fn is_attached(&self) -> bool {
        self.upgrade().is_some()
    }
}

impl fmt::Debug for DefinitionLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionLink")
            .field("component", &self.component_key())
            .field("attached", &self.is_attached())
            .finish()
    }
}
