//! Error types for prose generation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading locale resources or describing an
/// individual.
#[derive(Debug, Error)]
pub enum NlgError {
    // === Validation Errors ===
    /// The individual has no phenotypic features to describe.
    #[error("no HPO annotations for individual '{individual_id}'")]
    NoAnnotations { individual_id: String },

    // === Resource Errors ===
    /// Failed to read a grammar or translation file.
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Grammar table is not valid TOML or is missing entries.
    #[error("failed to parse grammar table: {source}")]
    GrammarParse {
        #[source]
        source: toml::de::Error,
    },

    /// Translation table could not be read as TSV.
    #[error("failed to read translation table: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Translation table row has an unusable value.
    #[error("invalid translation row at line {line}: {message}")]
    InvalidTranslationRow { line: u64, message: String },
}

impl NlgError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<csv::Error> for NlgError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

impl From<toml::de::Error> for NlgError {
    fn from(source: toml::de::Error) -> Self {
        Self::GrammarParse { source }
    }
}

/// Result type for prose generation.
pub type Result<T> = std::result::Result<T, NlgError>;
