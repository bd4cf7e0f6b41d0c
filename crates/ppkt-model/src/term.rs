use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Compact ontology identifier (CURIE) such as `HP:0001251`.
///
/// Only the `PREFIX:LOCAL` shape is checked; whether the term exists in the
/// ontology is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TermId(String);

impl TermId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        match trimmed.split_once(':') {
            Some((prefix, local))
                if !prefix.is_empty() && !local.is_empty() && !local.contains(':') =>
            {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ModelError::InvalidTermId { value }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TermId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for TermId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TermId> for String {
    fn from(id: TermId) -> Self {
        id.0
    }
}

/// A phenotypic observation: an ontology term that was either observed in,
/// or explicitly excluded for, the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyTerm {
    pub id: TermId,
    /// Default (ontology) label, used for diagnostics and fallback rendering.
    pub label: String,
    #[serde(default)]
    pub excluded: bool,
}

impl OntologyTerm {
    pub fn new(id: TermId, label: impl Into<String>, excluded: bool) -> Self {
        Self {
            id,
            label: label.into(),
            excluded,
        }
    }

    pub fn observed(id: TermId, label: impl Into<String>) -> Self {
        Self::new(id, label, false)
    }

    pub fn excluded(id: TermId, label: impl Into<String>) -> Self {
        Self::new(id, label, true)
    }

    pub fn is_observed(&self) -> bool {
        !self.excluded
    }
}
