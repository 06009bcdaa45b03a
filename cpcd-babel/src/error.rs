//! Error types for format operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No format registered under this name
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    /// The result could not be written out in this format
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<cpcd_parser::LoadError> for FormatError {
    fn from(err: cpcd_parser::LoadError) -> Self {
        FormatError::Serialization(err.to_string())
    }
}
