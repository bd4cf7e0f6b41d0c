//! Error types for the phenopacket model.

use thiserror::Error;

/// Errors raised while constructing model values from raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Term identifier is not a `PREFIX:LOCAL` CURIE.
    #[error("invalid term id '{value}': expected PREFIX:LOCAL")]
    InvalidTermId { value: String },

    /// Value is not an ISO 8601 duration such as `P46Y` or `P1Y6M`.
    #[error("invalid ISO 8601 duration '{value}': {reason}")]
    InvalidDuration { value: String, reason: String },

    /// Term id does not name an HPO onset category.
    #[error("'{id}' is not an HPO onset term")]
    UnknownOnset { id: String },
}

impl ModelError {
    pub(crate) fn duration(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
