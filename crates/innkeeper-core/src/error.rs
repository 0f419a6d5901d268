//! Error types for the wizard engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::StepFailure;

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Draft storage connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Whole-form validation rejected a submission
    #[error("Validation failed: {}", format_failures(.0))]
    Validation(Vec<StepFailure>),
    /// The backend rejected or failed a create/update call
    #[error("Submission failed: {message}")]
    Submission { message: String },
    /// Listing not found for the given ID
    #[error("Listing with ID {id} not found")]
    ListingNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn format_failures(failures: &[StepFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl WizardError {
    /// Creates a submission error from the first available human-readable
    /// message, in order of preference: a structured error payload, a
    /// transport error message, a fixed fallback.
    pub fn submission(message: Option<String>) -> Self {
        WizardError::Submission {
            message: message.unwrap_or_else(|| "listing submission failed".to_string()),
        }
    }

    /// Collected validation failures from this error, if it is one.
    pub fn validation_failures(&self) -> Option<&[StepFailure]> {
        match self {
            WizardError::Validation(failures) => Some(failures),
            _ => None,
        }
    }
}

/// Extension trait for mapping rusqlite results into storage errors with a
/// message.
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::Storage {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
