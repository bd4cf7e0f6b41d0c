use serde::{Deserialize, Serialize};

use crate::age::PhenopacketAge;
use crate::term::OntologyTerm;

/// Sex of the subject as recorded in the phenopacket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PhenopacketSex {
    #[serde(alias = "FEMALE", alias = "female")]
    Female,
    #[serde(alias = "MALE", alias = "male")]
    Male,
    /// Unknown, other, or not recorded.
    #[default]
    #[serde(alias = "UNKNOWN_SEX", alias = "OTHER_SEX", alias = "unknown")]
    Unknown,
}

/// The subject of a phenopacket, reduced to what prose generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub id: String,
    #[serde(default)]
    pub sex: PhenopacketSex,
    /// Age at last encounter.
    #[serde(default)]
    pub age: Option<PhenopacketAge>,
    /// Onset of the disease.
    #[serde(default)]
    pub onset: Option<PhenopacketAge>,
    #[serde(default)]
    pub phenotypic_features: Vec<OntologyTerm>,
}

impl Individual {
    pub fn new(id: impl Into<String>, sex: PhenopacketSex) -> Self {
        Self {
            id: id.into(),
            sex,
            age: None,
            onset: None,
            phenotypic_features: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_age(mut self, age: PhenopacketAge) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_onset(mut self, onset: PhenopacketAge) -> Self {
        self.onset = Some(onset);
        self
    }

    #[must_use]
    pub fn with_feature(mut self, term: OntologyTerm) -> Self {
        self.phenotypic_features.push(term);
        self
    }

    #[must_use]
    pub fn with_features<I>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = OntologyTerm>,
    {
        self.phenotypic_features.extend(terms);
        self
    }

    pub fn has_annotations(&self) -> bool {
        !self.phenotypic_features.is_empty()
    }

    pub fn observed_features(&self) -> impl Iterator<Item = &OntologyTerm> {
        self.phenotypic_features.iter().filter(|t| t.is_observed())
    }

    pub fn excluded_features(&self) -> impl Iterator<Item = &OntologyTerm> {
        self.phenotypic_features.iter().filter(|t| t.excluded)
    }
}
