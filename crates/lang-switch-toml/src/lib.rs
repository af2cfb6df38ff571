#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// File name looked up next to a crate manifest.
pub const CONFIG_FILE_NAME: &str = "lang.toml";

#[derive(Debug, Error)]
pub enum LangConfigError {
    /// Configuration file not found.
    #[error("lang.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The default language is blank.
    #[error("default_language must not be empty")]
    EmptyDefaultLanguage,
    /// The default language is not a language identifier.
    #[error("Invalid default language identifier '{name}'")]
    InvalidDefaultLanguage {
        /// The invalid identifier.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
    /// The storage key is blank.
    #[error("storage_key must not be empty")]
    EmptyStorageKey,
}

fn default_language() -> String {
    "EN".to_string()
}

fn default_storage_key() -> String {
    "CurrentCulture".to_string()
}

fn default_resource() -> PathBuf {
    PathBuf::from("Languages.json")
}

/// The configuration for `lang-switch`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LangConfig {
    /// Language used when neither the caller nor storage names one (e.g. "EN").
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Storage key under which the chosen language is remembered.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Path of the bundled resource, relative to the embedded asset folder.
    #[serde(default = "default_resource")]
    pub resource: PathBuf,
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            storage_key: default_storage_key(),
            resource: default_resource(),
        }
    }
}

impl LangConfig {
    /// Parses and validates configuration text, e.g. an `include_str!`ed
    /// `lang.toml` in a browser build without filesystem access.
    pub fn from_toml_str(content: &str) -> Result<Self, LangConfigError> {
        let config: LangConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LangConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LangConfigError::NotFound);
        }

        let content = fs_err::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reads `lang.toml` from `manifest_dir`.
    pub fn from_manifest_dir(manifest_dir: &Path) -> Result<Self, LangConfigError> {
        Self::read_from_path(manifest_dir.join(CONFIG_FILE_NAME))
    }

    /// Checks the fields that serde cannot: blank values and a default
    /// language that is not a language identifier.
    pub fn validate(&self) -> Result<(), LangConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(LangConfigError::EmptyStorageKey);
        }
        self.default_language_identifier()?;
        Ok(())
    }

    /// Returns the configured default language as a `LanguageIdentifier`.
    pub fn default_language_identifier(&self) -> Result<LanguageIdentifier, LangConfigError> {
        let name = self.default_language.trim();
        if name.is_empty() {
            return Err(LangConfigError::EmptyDefaultLanguage);
        }

        name.parse::<LanguageIdentifier>()
            .map_err(|source| LangConfigError::InvalidDefaultLanguage {
                name: self.default_language.clone(),
                source,
            })
    }

    /// Returns the resource path as a forward-slash string, the form
    /// embedded asset lookups expect.
    pub fn resource_path(&self) -> String {
        self.resource
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
