use lang_switch_core::LanguageCode;
use lang_switch_toml::{LangConfig, LangConfigError};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "CurrentCulture";

/// Settings of a [`LangService`](crate::LangService).
///
/// ```
/// use lang_switch::ServiceOptions;
/// use lang_switch_core::LanguageCode;
///
/// let options = ServiceOptions::builder()
///     .default_language(LanguageCode::new("ES").unwrap())
///     .storage_key("app.language")
///     .build();
///
/// assert_eq!(options.default_language().as_str(), "ES");
/// assert_eq!(options.storage_key(), "app.language");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, bon::Builder)]
pub struct ServiceOptions {
    /// Language loaded when the caller names none and nothing is stored.
    #[builder(default)]
    default_language: LanguageCode,

    /// Storage key of the remembered language.
    #[builder(into, default = DEFAULT_STORAGE_KEY.to_string())]
    storage_key: String,
}

impl ServiceOptions {
    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TryFrom<&LangConfig> for ServiceOptions {
    type Error = LangConfigError;

    fn try_from(config: &LangConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let default_language = LanguageCode::new(config.default_language.as_str())
            .map_err(|_| LangConfigError::EmptyDefaultLanguage)?;

        Ok(Self::builder()
            .default_language(default_language)
            .storage_key(config.storage_key.trim())
            .build())
    }
}
