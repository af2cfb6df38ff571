use thiserror::Error;

/// Errors raised while switching the active language.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bundled resource could not be read.
    #[error("Failed to read bundled resource '{name}': {reason}")]
    ResourceUnavailable { name: String, reason: String },
    /// The bundled resource is not a JSON array of entries.
    #[error("Failed to parse bundled resource: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two entries share the same non-empty identifier.
    #[error("Duplicate translation key '{0}' in bundled resource")]
    DuplicateKey(String),
    /// A language code was empty or whitespace only.
    #[error("Language code must not be empty")]
    EmptyLanguageCode,
    /// Reading or writing the stored preference failed.
    #[error("Language preference storage failed: {0}")]
    Storage(#[from] StoreError),
}

/// A language code could not be interpreted as a BCP-47 identifier.
///
/// Only raised by [`LanguageCode::to_language_identifier`](crate::LanguageCode::to_language_identifier);
/// switching languages never needs the conversion.
#[derive(Debug, Error)]
#[error("Language code '{code}' is not a valid language identifier")]
pub struct IdentifierError {
    pub code: String,
    #[source]
    pub source: unic_langid::LanguageIdentifierError,
}

/// Errors reported by a [`LanguageStore`](crate::LanguageStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Persistent storage is not available in this environment")]
    Unavailable,
    #[error("An underlying storage backend error occurred: {0}")]
    Backend(#[from] anyhow::Error),
}
