#![allow(dead_code)]

use anyhow::anyhow;
use futures::channel::oneshot;
use lang_switch::{LangService, LanguageStore, LoadError, MemoryStore, ResourceSource, StoreError};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const HELLO: &str = r#"[{"Id":"hello","EN":"Hello","ES":"Hola"}]"#;

/// A resource whose content can be replaced between loads.
#[derive(Clone, Default)]
pub struct SharedSource {
    content: Arc<Mutex<String>>,
    reads: Arc<AtomicUsize>,
}

impl SharedSource {
    pub fn new(content: &str) -> Self {
        let source = Self::default();
        source.replace(content);
        source
    }

    pub fn replace(&self, content: &str) {
        *self.content.lock() = content.to_string();
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ResourceSource for SharedSource {
    fn name(&self) -> &str {
        "shared"
    }

    fn read(&self) -> Result<Cow<'static, str>, LoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(Cow::Owned(self.content.lock().clone()))
    }
}

/// A store whose reads or writes fail on demand.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_get: Arc<Mutex<bool>>,
    fail_set: Arc<Mutex<bool>>,
}

impl FlakyStore {
    pub fn fail_get(&self, fail: bool) {
        *self.fail_get.lock() = fail;
    }

    pub fn fail_set(&self, fail: bool) {
        *self.fail_set.lock() = fail;
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.value(key)
    }
}

impl LanguageStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if *self.fail_get.lock() {
            return Err(StoreError::Backend(anyhow!("get '{}' refused", key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if *self.fail_set.lock() {
            return Err(StoreError::Unavailable);
        }
        self.inner.set(key, value).await
    }
}

/// A store whose first write blocks until the returned sender fires.
#[derive(Clone, Default)]
pub struct GatedStore {
    inner: MemoryStore,
    gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
    writes: Arc<AtomicUsize>,
}

impl GatedStore {
    pub fn gated() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let store = Self::default();
        *store.gate.lock() = Some(rx);
        (store, tx)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl LanguageStore for GatedStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }
}

/// Subscribes a listener that counts its invocations.
pub fn count_notifications<S: LanguageStore>(service: &LangService<S>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    service.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    count
}
