//! Umbrella error for a cpcd run

use cpcd_babel::FormatError;
use cpcd_parser::{ExtractError, LoadError, RequestError, SchemaError};
use std::path::PathBuf;
use thiserror::Error;

/// Any failure that stops a run. The Display text is the message shown to the user.
#[derive(Debug, Error)]
pub enum CpcdError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("invalid dictionary: {0}")]
    Schema(#[from] SchemaError),
    #[error("failure parsing dictionary request: {0}")]
    Request(#[from] RequestError),
    #[error("parse error: {0}")]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("unable to write {}: {message}", path.display())]
    Output { path: PathBuf, message: String },
    #[error("unable to write to output stream: {0}")]
    Io(#[from] std::io::Error),
}
