use crate::error::StoreError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Durable key-value storage for the user's language preference.
///
/// In a browser this is `window.localStorage`; tests and native hosts use
/// [`MemoryStore`].
pub trait LanguageStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>>;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>>;
}

/// An in-memory [`LanguageStore`].
///
/// Clones share the same map, so a test can keep a handle to inspect what the
/// service persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value, e.g. a preference saved by a previous session.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.lock().insert(key.into(), value.into());
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.lock().clone()
    }
}

impl LanguageStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: LanguageStore> LanguageStore for &S {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> {
        (**self).set(key, value)
    }
}

impl<S: LanguageStore> LanguageStore for Arc<S> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> {
        (**self).set(key, value)
    }
}
