//! Error types for email extraction

use thiserror::Error;

/// Errors that can occur while driving an extractor
#[derive(Error, Debug)]
pub enum ExtractError {
    /// An extraction was requested on an extractor that already holds results
    #[error("Emails have already been extracted; create a new extractor")]
    AlreadyExtracted,

    /// A transform or export was requested before any extraction
    #[error("No emails extracted yet; call an extract method first")]
    NotExtracted,

    /// The custom match pattern failed to compile
    #[error("Invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Failed to parse a raw message
    #[error("Failed to parse message: {0}")]
    Message(String),

    /// Failed to decode a configuration document
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to encode output as JSON
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
