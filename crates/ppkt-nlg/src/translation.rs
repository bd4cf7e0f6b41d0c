//! Locale-scoped term label lookup.
//!
//! A [`TranslationProvider`] answers "what is the label of this term in my
//! language?". Coverage is expected to be partial: a miss is a normal
//! outcome that the feature formatter records, never an error.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::io::Read;
use std::path::Path;

use ppkt_model::{OntologyTerm, TermId};
use serde::{Deserialize, Serialize};

use crate::error::{NlgError, Result};

/// Lookup from term identifier to a label in one language.
pub trait TranslationProvider {
    fn label(&self, id: &TermId) -> Option<&str>;
}

impl<T: TranslationProvider + ?Sized> TranslationProvider for &T {
    fn label(&self, id: &TermId) -> Option<&str> {
        (**self).label(id)
    }
}

impl<S: BuildHasher> TranslationProvider for HashMap<TermId, String, S> {
    fn label(&self, id: &TermId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl TranslationProvider for BTreeMap<TermId, String> {
    fn label(&self, id: &TermId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// In-memory label table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMap {
    pub language: String,
    pub labels: BTreeMap<TermId, String>,
}

impl TranslationMap {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Table that renders each term with its own ontology label.
    ///
    /// This is how the source language of the ontology (English for HPO) is
    /// served through the same provider seam as real translations.
    pub fn from_terms<'t, I>(language: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = &'t OntologyTerm>,
    {
        let mut map = Self::new(language);
        for term in terms {
            map.insert(term.id.clone(), term.label.clone());
        }
        map
    }

    /// Insert a label, returning the previous one for this id.
    pub fn insert(&mut self, id: TermId, label: impl Into<String>) -> Option<String> {
        self.labels.insert(id, label.into())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Load the rows for `language` from a Babelon TSV file.
    pub fn from_babelon_path(path: &Path, language: &str) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| NlgError::io(path, e))?;
        let map = Self::from_babelon_reader(file, language)?;
        tracing::info!(
            path = %path.display(),
            language,
            labels = map.len(),
            "loaded translation table"
        );
        Ok(map)
    }

    /// Read a Babelon TSV table, keeping rows for `language`.
    ///
    /// Required columns are `subject_id`, `translation_language` and
    /// `translation_value`. When a `translation_status` column is present,
    /// only `OFFICIAL` (or blank) rows are kept. Rows with an empty value are
    /// skipped; a malformed `subject_id` fails the whole load.
    pub fn from_babelon_reader<R: Read>(reader: R, language: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut map = Self::new(language);
        let mut skipped = 0usize;
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let row: BabelonRow = record.deserialize(Some(&headers))?;

            if !row.translation_language.trim().eq_ignore_ascii_case(language) {
                continue;
            }
            let value = row.translation_value.trim();
            if value.is_empty() || !row.is_official() {
                skipped += 1;
                continue;
            }
            let id = TermId::new(row.subject_id.as_str()).map_err(|e| {
                NlgError::InvalidTranslationRow {
                    line,
                    message: e.to_string(),
                }
            })?;
            map.insert(id, value);
        }
        if skipped > 0 {
            tracing::debug!(language, skipped, "skipped unofficial or empty translations");
        }
        Ok(map)
    }
}

impl TranslationProvider for TranslationMap {
    fn label(&self, id: &TermId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }
}

impl FromIterator<(TermId, String)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (TermId, String)>>(iter: I) -> Self {
        Self {
            language: String::new(),
            labels: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BabelonRow {
    subject_id: String,
    translation_language: String,
    translation_value: String,
    #[serde(default)]
    translation_status: Option<String>,
}

impl BabelonRow {
    fn is_official(&self) -> bool {
        match self.translation_status.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(status) => status.eq_ignore_ascii_case("OFFICIAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BABELON: &str = "source_language\tsource_value\tsubject_id\tpredicate_id\ttranslation_value\ttranslation_language\ttranslation_status
en\tAtaxia\tHP:0001251\trdfs:label\tAtaxie\tde\tOFFICIAL
en\tAtaxia\tHP:0001251\trdfs:label\tAtassia\tit\tOFFICIAL
en\tHepatomegaly\tHP:0002240\trdfs:label\tHepatomegalie\tde\tCANDIDATE
en\tPneumonia\tHP:0002090\trdfs:label\t\tde\tOFFICIAL
en\tLymphopenia\tHP:0001888\trdfs:label\tLymphopenie\tde\t
";

    #[test]
    fn test_babelon_keeps_official_rows_for_language() {
        let map = TranslationMap::from_babelon_reader(BABELON.as_bytes(), "de").unwrap();
        assert_eq!(map.language, "de");
        assert_eq!(map.len(), 2);
        let ataxia = TermId::new("HP:0001251").unwrap();
        assert_eq!(map.label(&ataxia), Some("Ataxie"));
        let lymphopenia = TermId::new("HP:0001888").unwrap();
        assert_eq!(map.label(&lymphopenia), Some("Lymphopenie"));
        let hepatomegaly = TermId::new("HP:0002240").unwrap();
        assert_eq!(map.label(&hepatomegaly), None);
    }

    #[test]
    fn test_babelon_rejects_malformed_id() {
        let tsv = "subject_id\ttranslation_value\ttranslation_language\nHP0001251\tAtaxie\tde\n";
        let err = TranslationMap::from_babelon_reader(tsv.as_bytes(), "de").unwrap_err();
        assert!(matches!(err, NlgError::InvalidTranslationRow { line: 2, .. }));
    }

    #[test]
    fn test_hash_map_is_a_provider() {
        let mut labels = HashMap::new();
        labels.insert(TermId::new("HP:0001251").unwrap(), "Ataxie".to_string());
        let provider: &dyn TranslationProvider = &labels;
        assert_eq!(
            provider.label(&TermId::new("HP:0001251").unwrap()),
            Some("Ataxie")
        );
        assert_eq!(provider.label(&TermId::new("HP:0002240").unwrap()), None);
    }
}
