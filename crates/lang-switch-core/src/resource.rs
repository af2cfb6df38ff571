//! Bundled resource records and the static language accessor table.
//!
//! A resource is a JSON array of objects, each carrying an `Id` and one string
//! field per language code:
//!
//! ```json
//! [
//!   { "Id": "hello", "EN": "Hello", "ES": "Hola" },
//!   { "Id": "bye", "EN": "Bye" }
//! ]
//! ```
//!
//! Languages are not discovered by inspecting field names at runtime. Each
//! record type lists its columns once in a `const` table of
//! [`LanguageColumn`]s, usually generated by [`define_text_resource!`].

use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::fmt;

/// One `(code, extractor)` pair of a record's language table.
pub struct LanguageColumn<E> {
    pub code: &'static str,
    pub extract: fn(&E) -> Option<&str>,
}

impl<E> LanguageColumn<E> {
    pub const fn new(code: &'static str, extract: fn(&E) -> Option<&str>) -> Self {
        Self { code, extract }
    }

    pub fn value<'a>(&self, entry: &'a E) -> Option<&'a str> {
        (self.extract)(entry)
    }
}

impl<E> Clone for LanguageColumn<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for LanguageColumn<E> {}

impl<E> fmt::Debug for LanguageColumn<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageColumn")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

/// A record of the bundled resource: one key and its per-language strings.
pub trait ResourceEntry: DeserializeOwned + 'static {
    /// The translation key. Empty when the record has no usable `Id`.
    fn id(&self) -> &str;

    /// Every language column the record type knows, in catalog order.
    fn columns() -> &'static [LanguageColumn<Self>];

    /// The value stored for `code`, if the record type has such a column and
    /// the record carries a value for it.
    fn text(&self, code: &str) -> Option<&str> {
        Self::columns()
            .iter()
            .find(|column| column.code == code)
            .and_then(|column| column.value(self))
    }
}

/// Declares a resource record type and its [`ResourceEntry`] accessor table.
///
/// Each `"CODE" => field` pair becomes an optional string field deserialized
/// from the JSON property `CODE`. The key is read from `Id`. The calling crate
/// must depend on `serde`.
///
/// ```
/// lang_switch_core::define_text_resource! {
///     /// Strings for a two-language app.
///     pub struct AppText {
///         "EN" => en,
///         "DE" => de,
///     }
/// }
///
/// use lang_switch_core::ResourceEntry;
/// let entry: AppText = serde_json::from_str(r#"{"Id":"ok","DE":"Gut"}"#).unwrap();
/// assert_eq!(entry.id(), "ok");
/// assert_eq!(entry.text("DE"), Some("Gut"));
/// assert_eq!(entry.text("EN"), None);
/// ```
#[macro_export]
macro_rules! define_text_resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $code:literal => $field:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, ::serde::Deserialize, ::serde::Serialize)]
        $vis struct $name {
            #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
            pub id: ::std::option::Option<::std::string::String>,
            $(
                $(#[$field_meta])*
                #[serde(rename = $code, default, skip_serializing_if = "Option::is_none")]
                pub $field: ::std::option::Option<::std::string::String>,
            )+
        }

        impl $crate::ResourceEntry for $name {
            fn id(&self) -> &str {
                self.id.as_deref().unwrap_or_default()
            }

            fn columns() -> &'static [$crate::LanguageColumn<Self>] {
                $(
                    fn $field(entry: &$name) -> ::std::option::Option<&str> {
                        entry.$field.as_deref()
                    }
                )+
                const COLUMNS: &[$crate::LanguageColumn<$name>] =
                    &[$($crate::LanguageColumn::new($code, $field)),+];
                COLUMNS
            }
        }
    };
}

define_text_resource! {
    /// The default record shape: English, Spanish, Portuguese, Russian,
    /// Norwegian and Italian.
    pub struct TextResource {
        "EN" => en,
        "ES" => es,
        "PT" => pt,
        "RU" => ru,
        "NO" => no,
        "IT" => it,
    }
}

/// The ordered, read-only sequence of records parsed from the bundled resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceTable<E> {
    entries: Vec<E>,
}

impl<E: ResourceEntry> ResourceTable<E> {
    /// Parses a JSON array of records. A leading byte order mark is ignored.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let entries: Vec<E> = serde_json::from_str(json)?;
        tracing::debug!(entries = entries.len(), "Parsed bundled resource");
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// The exemplar used to derive the language catalog.
    pub fn first(&self) -> Option<&E> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
