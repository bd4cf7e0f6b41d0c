//! Diagnostics for terms the active locale could not translate.

use std::collections::BTreeSet;

use ppkt_model::TermId;
use serde::Serialize;

/// Set of `"<label> (<term id>)"` entries for untranslated terms.
///
/// Entries are only ever added. Formatting calls return their own set (see
/// [`crate::Rendered`]) and callers fold them together with [`merge`].
///
/// [`merge`]: MissingTranslations::merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissingTranslations {
    entries: BTreeSet<String>,
}

impl MissingTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a miss. Returns false if the entry was already present.
    pub fn record(&mut self, label: &str, id: &TermId) -> bool {
        self.entries.insert(format!("{label} ({id})"))
    }

    pub fn get_all(&self) -> &BTreeSet<String> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn merge(&mut self, other: MissingTranslations) {
        self.entries.extend(other.entries);
    }
}

impl Extend<String> for MissingTranslations {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for MissingTranslations {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
