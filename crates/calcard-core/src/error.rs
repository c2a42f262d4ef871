//! Unified error types for calcard.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while building calcard descriptors.
#[derive(Error, Debug)]
pub enum CalcardError {
    // --- Validation ---

    /// A layout parameter is unusable (empty font name, non-positive size or pitch).
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The month is outside 1..=12, or the year cannot be represented by the date library.
    #[error("date out of range: {year}-{month:02} (month must be 1..=12)")]
    OutOfRangeDate { year: i64, month: i64 },

    // --- Configuration ---

    /// The configuration file (`calcard.toml`) could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but is not valid TOML for the expected schema.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // --- Output ---

    /// A descriptor could not be serialized to TOML.
    #[error("descriptor serialization failed: {0}")]
    Serialize(String),
}

impl From<toml::ser::Error> for CalcardError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

/// Alias for `Result<T, CalcardError>`.
pub type Result<T> = std::result::Result<T, CalcardError>;
