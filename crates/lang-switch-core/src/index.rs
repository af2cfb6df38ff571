use crate::code::LanguageCode;
use crate::error::LoadError;
use crate::resource::{ResourceEntry, ResourceTable};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Key to string mapping for a single language.
///
/// Built in one pass from a [`ResourceTable`] and never mutated afterwards;
/// switching languages replaces the whole index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationIndex {
    texts: FxHashMap<String, String>,
}

impl TranslationIndex {
    /// Projects the `code` column of `table`.
    ///
    /// Records with an empty key are skipped. A record without a value for
    /// `code` maps its key to the empty string.
    pub fn project<E: ResourceEntry>(
        table: &ResourceTable<E>,
        code: &LanguageCode,
    ) -> Result<Self, LoadError> {
        let mut texts = FxHashMap::default();
        texts.reserve(table.len());

        let mut skipped = 0usize;
        for entry in table.iter() {
            let id = entry.id();
            if id.is_empty() {
                skipped += 1;
                continue;
            }

            let text = entry.text(code.as_str()).unwrap_or_default();
            match texts.entry(id.to_string()) {
                Entry::Occupied(_) => return Err(LoadError::DuplicateKey(id.to_string())),
                Entry::Vacant(slot) => {
                    slot.insert(text.to_string());
                },
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, language = %code, "Skipped resource entries without a key");
        }

        Ok(Self { texts })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.texts.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
