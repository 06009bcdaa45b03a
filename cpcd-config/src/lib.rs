//! Shared configuration loader for cpcd.
//!
//! `defaults/cpcd.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. Callers layer user files and CLI overrides on top of those defaults via
//! [`Loader`] before deserializing into [`CpcdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use cpcd_babel::FortranOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/cpcd.default.toml");

/// Name of the optional project-level configuration file
pub const PROJECT_CONFIG_FILE: &str = "cpcd.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CpcdConfig {
    pub paths: PathsConfig,
    pub validation: ValidationConfig,
    pub emit: EmitConfig,
}

/// Default input and output locations
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub dictionary: PathBuf,
    pub request: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmitConfig {
    pub format: String,
    pub fortran: FortranOptions,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply an override only when a value is present
    pub fn set_override_option<I>(self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CpcdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CpcdConfig, ConfigError> {
    Loader::new().build()
}
