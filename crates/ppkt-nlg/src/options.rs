//! Configuration options for prose generation.

use serde::{Deserialize, Serialize};

/// What to render for a term the active locale cannot translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLabelPolicy {
    /// Leave the term out of the sentence.
    #[default]
    Drop,
    /// Render the term's own ontology label instead.
    FallbackToDefault,
}

/// Options for feature formatting.
///
/// Either way the miss is recorded in the missing-translation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub missing_label_policy: MissingLabelPolicy,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_label_policy(mut self, policy: MissingLabelPolicy) -> Self {
        self.missing_label_policy = policy;
        self
    }
}
