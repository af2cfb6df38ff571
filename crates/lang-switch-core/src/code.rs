use crate::error::{IdentifierError, LoadError};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// The code used when neither the caller nor the store names a language.
pub const FALLBACK_LANGUAGE: &str = "EN";

/// A language code as it appears in the bundled resource, e.g. `EN` or `ES`.
///
/// Codes are trimmed and must not be empty. Comparison is case-sensitive so a
/// code always names exactly one resource column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Result<Self, LoadError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(LoadError::EmptyLanguageCode);
        }
        if trimmed.len() == code.len() {
            Ok(Self(code))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The hard-coded default, [`FALLBACK_LANGUAGE`].
    pub fn fallback() -> Self {
        Self(FALLBACK_LANGUAGE.to_string())
    }

    pub(crate) fn from_column(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the code as a BCP-47 identifier, e.g. for an `<html lang>` attribute.
    ///
    /// `EN` becomes `en`, `NO` becomes `no`.
    pub fn to_language_identifier(&self) -> Result<LanguageIdentifier, IdentifierError> {
        self.0
            .parse::<LanguageIdentifier>()
            .map_err(|source| IdentifierError {
                code: self.0.clone(),
                source,
            })
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
