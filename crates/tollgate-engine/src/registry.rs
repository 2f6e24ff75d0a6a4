use std::collections::HashMap;
use std::sync::Arc;

use tollgate_core::condition::Condition;

/// Explicit name-to-condition registry.
///
/// The owning application registers its conditions at startup and hands
/// the registry to whatever layer needs to look them up by name; the
/// engine never discovers condition types on its own.
#[derive(Default)]
pub struct ConditionRegistry {
    entries: HashMap<String, Arc<dyn Condition>>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("condition '{0}' is already registered")]
    Duplicate(String),
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `condition` under `name`. Names are unique; re-registering
    /// is a configuration error, not a silent replacement.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        condition: Arc<dyn Condition>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries.insert(name, condition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Condition>> {
        self.entries.get(name).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
