use crate::options::ServiceOptions;
use crate::source::ResourceSource;
use arc_swap::ArcSwap;
use futures::lock::Mutex;
use lang_switch_core::{
    ChangeNotifier, LanguageCatalog, LanguageCode, LanguageStore, LoadError, ResourceEntry,
    ResourceTable, SubscriptionId, TextResource, TranslationIndex,
};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

/// Result of a successful [`LangService::load_language`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The language was switched and subscribers were notified.
    Loaded(LanguageCode),
    /// The language was already active; nothing happened.
    Unchanged(LanguageCode),
}

impl LoadOutcome {
    pub fn language(&self) -> &LanguageCode {
        match self {
            LoadOutcome::Loaded(code) | LoadOutcome::Unchanged(code) => code,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// The committed language and its index, swapped as one value.
#[derive(Debug, Default)]
struct ActiveLanguage {
    code: Option<LanguageCode>,
    index: TranslationIndex,
}

/// Owns the active language and serves its strings to the UI.
///
/// Construct one at startup, keep it for the lifetime of the application and
/// hand out references (or an `Arc`) to components. Components read strings
/// with [`text`](Self::text) and re-render when a listener registered with
/// [`subscribe`](Self::subscribe) fires.
pub struct LangService<S, E = TextResource> {
    source: Box<dyn ResourceSource>,
    store: S,
    options: ServiceOptions,
    active: ArcSwap<ActiveLanguage>,
    catalog: OnceLock<LanguageCatalog>,
    notifier: ChangeNotifier,
    load_lock: Mutex<()>,
    _entry: PhantomData<fn() -> E>,
}

impl<S: LanguageStore> LangService<S> {
    /// Creates a service over [`TextResource`] records with default options.
    pub fn new(source: impl ResourceSource + 'static, store: S) -> Self {
        Self::with_options(source, store, ServiceOptions::default())
    }

    pub fn with_options(
        source: impl ResourceSource + 'static,
        store: S,
        options: ServiceOptions,
    ) -> Self {
        Self::custom(source, store, options)
    }
}

impl<S: LanguageStore, E: ResourceEntry> LangService<S, E> {
    /// Creates a service over a custom record type, e.g. one declared with
    /// [`define_text_resource!`](lang_switch_core::define_text_resource).
    pub fn custom(
        source: impl ResourceSource + 'static,
        store: S,
        options: ServiceOptions,
    ) -> Self {
        Self {
            source: Box::new(source),
            store,
            options,
            active: ArcSwap::from_pointee(ActiveLanguage::default()),
            catalog: OnceLock::new(),
            notifier: ChangeNotifier::new(),
            load_lock: Mutex::new(()),
            _entry: PhantomData,
        }
    }

    /// Switches to `code`, or to the stored preference, or to the default
    /// language.
    ///
    /// Loads are serialized: a call waits for any load in progress before it
    /// compares against the active language, so overlapping requests for the
    /// same code switch only once.
    ///
    /// The new language is committed only after the resource was parsed,
    /// indexed and the choice persisted. On error nothing changes, no
    /// listener runs, and the error is logged before being returned.
    pub async fn load_language(&self, code: Option<&str>) -> Result<LoadOutcome, LoadError> {
        let _in_flight = self.load_lock.lock().await;

        self.switch(code).await.inspect_err(|err| {
            tracing::error!(
                error = %err,
                requested = code.unwrap_or("<stored or default>"),
                resource = self.source.name(),
                "Failed to load language"
            );
        })
    }

    async fn switch(&self, requested: Option<&str>) -> Result<LoadOutcome, LoadError> {
        let code = self.resolve(requested).await?;

        if self.active.load().code.as_ref() == Some(&code) {
            tracing::debug!(language = %code, "Language already active");
            return Ok(LoadOutcome::Unchanged(code));
        }

        let raw = self.source.read()?;
        let table = ResourceTable::<E>::from_json(&raw)?;
        let index = TranslationIndex::project(&table, &code)?;

        self.store
            .set(self.options.storage_key(), code.as_str())
            .await?;

        let keys = index.len();
        self.active.store(Arc::new(ActiveLanguage {
            code: Some(code.clone()),
            index,
        }));

        if let Some(exemplar) = table.first() {
            self.catalog
                .get_or_init(|| LanguageCatalog::from_exemplar(exemplar));
        }

        let notified = self.notifier.notify();
        tracing::info!(language = %code, keys, notified, "Switched language");

        Ok(LoadOutcome::Loaded(code))
    }

    async fn resolve(&self, requested: Option<&str>) -> Result<LanguageCode, LoadError> {
        if let Some(code) = requested {
            return LanguageCode::new(code);
        }

        match self.store.get(self.options.storage_key()).await? {
            Some(stored) if !stored.trim().is_empty() => {
                tracing::debug!(language = %stored, "Using stored language preference");
                LanguageCode::new(stored)
            },
            Some(_) => {
                tracing::warn!(
                    key = self.options.storage_key(),
                    "Ignoring blank stored language preference"
                );
                Ok(self.options.default_language().clone())
            },
            None => Ok(self.options.default_language().clone()),
        }
    }

    /// The text of `key` in the active language, or `[key]` when the key is
    /// unknown or no language has been loaded yet.
    ///
    /// A known key without a translation yields the empty string.
    pub fn text(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| format!("[{}]", key))
    }

    /// Like [`text`](Self::text) but without the placeholder.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.active.load().index.get(key).map(str::to_owned)
    }

    /// The committed language, `None` until the first successful load.
    pub fn current_language(&self) -> Option<LanguageCode> {
        self.active.load().code.clone()
    }

    /// Languages supported by the bundled data.
    ///
    /// Derived once, from the first record of the first successfully loaded
    /// resource, and never recomputed. Empty before that.
    pub fn available_languages(&self) -> LanguageCatalog {
        self.catalog.get().cloned().unwrap_or_default()
    }

    /// Registers a listener that runs after every language switch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, E> fmt::Debug for LangService<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active.load();
        f.debug_struct("LangService")
            .field("source", &self.source.name())
            .field("options", &self.options)
            .field("current_language", &active.code)
            .field("keys", &active.index.len())
            .field("catalog", &self.catalog.get())
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}
