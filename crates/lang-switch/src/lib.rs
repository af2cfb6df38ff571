#![doc = include_str!("../README.md")]

mod options;
mod service;
pub mod source;
#[cfg(feature = "web")]
pub mod web;

pub use lang_switch_core::{
    FALLBACK_LANGUAGE, IdentifierError, LanguageCatalog, LanguageCode, LanguageColumn, LanguageStore, LoadError,
    MemoryStore, ResourceEntry, StoreError, SubscriptionId, TextResource, define_text_resource,
};
pub use lang_switch_toml::{LangConfig, LangConfigError};
pub use options::{DEFAULT_STORAGE_KEY, ServiceOptions};
pub use service::{LangService, LoadOutcome};
pub use source::{EmbeddedResource, ResourceSource, StaticResource};
#[cfg(feature = "web")]
pub use web::LocalStorage;
