use std::collections::HashMap;

use parking_lot::RwLock;

use crate::read_env::ReadEnv;

/// A map-backed environment for tests and embedding.
///
/// Mutation goes through `&self`, so a resolver can hold a reference while
/// the test keeps setting variables.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.write().remove(key);
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }
}
