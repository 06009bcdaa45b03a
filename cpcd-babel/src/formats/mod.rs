//! Built-in output formats

pub mod fortran;
pub mod yaml;
