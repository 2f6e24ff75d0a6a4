use std::collections::HashMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Named bag of values supplied to a single evaluation or gating call.
///
/// Keys are caller-defined (typically an actor, a target object, request
/// metadata); the engine routes values to conditions without interpreting
/// them. The underlying map is shared, so cloning a context for a verdict
/// snapshot is cheap and the snapshot stays read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: Arc<HashMap<String, Value>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, copying the underlying map if it is currently shared.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        Arc::make_mut(&mut self.values).insert(key.into(), value);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys present in the bag, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// New bag holding only the named keys that are present in this one.
    /// Names without a value are skipped, not errors.
    pub fn project<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Context {
        let mut picked = HashMap::new();
        for key in keys {
            if let Some(value) = self.values.get(key) {
                picked.insert(key.to_string(), value.clone());
            }
        }
        Context {
            values: Arc::new(picked),
        }
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Context {
            values: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.as_ref().serialize(serializer)
    }
}
