//! Runtime configuration
//!
//! `defaults/rootword.default.toml` is embedded into the binary so the documented
//! defaults and the runtime behavior stay in sync. User files are layered on top via
//! [`Loader`] before deserializing into [`RootwordConfig`].

use crate::rootword::formats::{Emphasis, OutputMode};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/rootword.default.toml");

/// Project-local override file, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "rootword.toml";

/// Environment variable naming an extra configuration file
pub const CONFIG_ENV_VAR: &str = "ROOTWORD_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct RootwordConfig {
    pub lexicon: LexiconConfig,
    pub render: RenderConfig,
}

/// Where the lexicon tables live
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    pub roots: PathBuf,
    pub suffixes: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub emphasis: Emphasis,
    pub default_mode: OutputMode,
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

    /// Defaults, then `rootword.toml` if present, then the file named by `ROOTWORD_CONFIG`.
    pub fn discover() -> Self {
        let loader = Self::new().with_optional_file(LOCAL_CONFIG_FILE);
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => loader.with_file(path),
            None => loader,
        }
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RootwordConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RootwordConfig, ConfigError> {
    Loader::new().build()
}
