#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod code;
pub mod error;
pub mod index;
pub mod notify;
pub mod resource;
pub mod store;

pub use catalog::LanguageCatalog;
pub use code::{FALLBACK_LANGUAGE, LanguageCode};
pub use error::{IdentifierError, LoadError, StoreError};
pub use index::TranslationIndex;
pub use notify::{ChangeNotifier, SubscriptionId};
pub use resource::{LanguageColumn, ResourceEntry, ResourceTable, TextResource};
pub use store::{LanguageStore, MemoryStore};
