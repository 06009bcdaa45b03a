//! Output formats for extracted constants
//!
//!     This crate turns an [`cpcd_parser::ExtractionResult`] into text. It is a pure lib: no
//!     printing, no files, no environment. The orchestrator decides where the text goes.
//!
//!     - Format trait: uniform interface for all outputs ([`format`])
//!     - FormatRegistry: lookup by name ([`registry`])
//!     - formats/fortran: the Fortran module of named parameters, the tool's product
//!     - formats/yaml: the extraction result as YAML, for inspection
//!
//!     Only Fortran is generated as code. The YAML output is a data dump, not another target
//!     language.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::fortran::{FortranFormat, FortranOptions};
pub use formats::yaml::YamlFormat;
pub use registry::FormatRegistry;
