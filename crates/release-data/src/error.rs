//! Error types for the release-data crate.
//!
//! Everything that can go wrong while turning files, JSON documents or
//! user-supplied tokens into domain types ends up in [`DataLoadError`].

use thiserror::Error;

/// Errors that can occur while loading candidates, configuration or tokens.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON document couldn't be decoded
    #[error("JSON error in {source_name}: {reason}")]
    JsonError { source_name: String, reason: String },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A season or episode token is not `<letter><digits>`, or its number
    /// doesn't fit
    #[error("Invalid {kind} token: {token:?}")]
    InvalidToken { kind: &'static str, token: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
