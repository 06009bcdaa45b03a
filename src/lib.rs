//! # cpcd
//!
//! Validate a physical constants dictionary, select constants from it and emit them as a
//! Fortran module.
//!
//! The tree-matching work lives in `cpcd-parser`, output formats in `cpcd-babel`. This crate
//! sequences them: [`Session`] holds the loaded trees and exposes each step on its own, and
//! [`Pipeline`] runs the whole read → validate → request → extract → emit sequence the CLI
//! needs, stopping at the first error.

pub mod error;
pub mod pipeline;
pub mod session;

pub use error::CpcdError;
pub use pipeline::{Outcome, Pipeline, PipelineOptions, RequestSource};
pub use session::Session;
