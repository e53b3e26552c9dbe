//! In-memory component registry
//!
//! Resolves references against components registered by key. Used to wire
//! prebuilt components without a full container.

use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;
use wiring_domain::ObjectValue;
use wiring_domain::error::{Error, Result};
use wiring_domain::ports::ReferenceResolver;

/// Concurrent map of component key to live instance
#[derive(Default)]
pub struct ComponentRegistry {
    components: DashMap<String, ObjectValue>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `component` under `key`, replacing any previous one
    pub fn register<T: Any + Send + Sync>(&self, key: impl Into<String>, component: T) {
        self.register_shared(key, Arc::new(component));
    }

    /// Register an already shared instance
    pub fn register_shared(&self, key: impl Into<String>, component: ObjectValue) {
        let key = key.into();
        if self.components.insert(key.clone(), component).is_some() {
            tracing::debug!(key = %key, "Component replaced in registry");
        } else {
            tracing::trace!(key = %key, "Component registered");
        }
    }

    /// Remove the component under `key`
    pub fn remove(&self, key: &str) -> Option<ObjectValue> {
        self.components.remove(key).map(|(_, component)| component)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.components.iter().map(|e| e.key().clone()).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ReferenceResolver for ComponentRegistry {
    fn resolve_reference(&self, identifier: &str) -> Result<ObjectValue> {
        self.components
            .get(identifier)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::reference_not_found(identifier))
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
