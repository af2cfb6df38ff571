use crate::code::LanguageCode;
use crate::resource::ResourceEntry;
use indexmap::IndexSet;

/// The languages the bundled data supports, in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    codes: IndexSet<LanguageCode>,
}

impl LanguageCatalog {
    /// Derives the catalog from one exemplar record: every column for which
    /// the exemplar holds a non-empty value.
    pub fn from_exemplar<E: ResourceEntry>(exemplar: &E) -> Self {
        let codes = E::columns()
            .iter()
            .filter(|column| column.value(exemplar).is_some_and(|text| !text.is_empty()))
            .map(|column| LanguageCode::from_column(column.code))
            .collect();
        Self { codes }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<'a> IntoIterator for &'a LanguageCatalog {
    type Item = &'a LanguageCode;
    type IntoIter = indexmap::set::Iter<'a, LanguageCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
