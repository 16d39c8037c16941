//! Shared configuration loader for the snaptree toolchain.
//!
//! `defaults/snaptree.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`SnaptreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/snaptree.default.toml");

/// Top-level configuration consumed by snaptree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SnaptreeConfig {
    pub printer: PrinterConfig,
    pub snapshot: SnapshotConfig,
}

/// Mirrors the knobs exposed by the printer engine.
#[derive(Debug, Clone, Deserialize)]
pub struct PrinterConfig {
    pub indent_string: String,
    pub max_depth: usize,
}

impl From<PrinterConfig> for snaptree_print::Config {
    fn from(config: PrinterConfig) -> Self {
        snaptree_print::Config {
            indent: config.indent_string,
            max_depth: config.max_depth,
        }
    }
}

impl From<&PrinterConfig> for snaptree_print::Config {
    fn from(config: &PrinterConfig) -> Self {
        snaptree_print::Config {
            indent: config.indent_string.clone(),
            max_depth: config.max_depth,
        }
    }
}

/// Controls how snapshot text is written out by applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    pub trailing_newline: bool,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SnaptreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SnaptreeConfig, ConfigError> {
    Loader::new().build()
}
