//! Error types for PassForge

use thiserror::Error;

use crate::pipeline::Stage;

/// Main error type for wordlist generation
#[derive(Error, Debug)]
pub enum PassForgeError {
    /// Birth date did not match any accepted format
    #[error("Invalid birth date format '{0}': date format not recognized")]
    InvalidDate(String),

    /// Keyword file does not exist
    #[error("Keyword file not found: {0}")]
    KeywordFileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The accumulation grew (or would grow) beyond the configured cap
    #[error("Candidate limit exceeded during {stage} stage: {count} candidates (limit {limit})")]
    CandidateLimitExceeded {
        stage: Stage,
        count: usize,
        limit: usize,
    },

    /// Wordlist could not be written
    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<serde_json::Error> for PassForgeError {
    fn from(err: serde_json::Error) -> Self {
        PassForgeError::ConfigError(err.to_string())
    }
}

/// Result type alias for PassForge operations
pub type Result<T> = std::result::Result<T, PassForgeError>;
