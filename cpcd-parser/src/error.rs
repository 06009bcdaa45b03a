//! Error types for loading, validating, normalizing and extracting
//!
//!     Every error here is terminal for the operation that raised it: validation stops at the
//!     first mismatch, extraction returns no partial result. The Display text is the single
//!     message shown to the user.

use crate::node::NodeKind;
use crate::path::NodePath;
use std::path::PathBuf;
use thiserror::Error;

/// Error that can occur when loading or rendering a YAML document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("unable to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    /// The text is not well-formed YAML
    #[error("malformed YAML: {0}")]
    Syntax(String),
    /// A tree could not be rendered back to YAML
    #[error("unable to render YAML: {0}")]
    Render(String),
}

/// Structural mismatch between a document and a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unmatched node type at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: NodePath,
        expected: NodeKind,
        found: NodeKind,
    },
    /// Carries the element's error inline; it is part of the message, not the error chain.
    #[error("unmatched list syntax at {path}: {inner}")]
    SequenceMismatch {
        path: NodePath,
        inner: Box<SchemaError>,
    },
    #[error("missing key '{key}' at {path}")]
    MissingKey { path: NodePath, key: String },
}

/// Malformed user request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("requests should not include nested maps (group '{group}')")]
    NestedMapNotAllowed { group: String },
    #[error("request must be a mapping of group names to constant names, found {found}")]
    NotAMapping { found: NodeKind },
    #[error("request for group '{group}' lists a non-scalar constant name")]
    NonScalarName { group: String },
}

/// The dictionary does not have the shape the query walks through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("parsing mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        path: NodePath,
        expected: NodeKind,
        found: NodeKind,
    },
}
