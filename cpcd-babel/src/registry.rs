//! Format registry for format discovery and selection

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::fortran::{FortranFormat, FortranOptions};
use crate::formats::yaml::YamlFormat;
use cpcd_parser::ExtractionResult;
use std::collections::HashMap;

/// Registry of output formats, keyed by name
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a result using the named format
    pub fn serialize(&self, result: &ExtractionResult, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(result)
    }

    /// Registry with the built-in formats, Fortran configured by `fortran`
    pub fn with_options(fortran: FortranOptions) -> Self {
        let mut registry = Self::new();
        registry.register(FortranFormat::new(fortran));
        registry.register(YamlFormat);
        registry
    }

    /// Registry with the built-in formats in their default configuration
    pub fn with_defaults() -> Self {
        Self::with_options(FortranOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
