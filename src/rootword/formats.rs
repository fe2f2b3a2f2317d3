//! Output formats for fragment sequences
//!
//! - `tree`: annotation lines drawn with box-drawing guides, then the styled word line
//! - `dat`: one tab-separated `start..end`, text, meaning row per root or suffix
//!
//! Each format implements [`Formatter`] and is looked up by name in a [`FormatRegistry`].

pub mod dat;
pub mod tree;

pub use dat::{to_dat_str, DatFormatter};
pub use tree::{to_tree_str, Emphasis, TreeFormatter};

use crate::rootword::fragment::WordFragment;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
}

/// Trait for fragment formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tree", "dat")
    fn name(&self) -> &str;

    fn serialize(&self, fragments: &[WordFragment]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// The output modes offered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Tree,
    Dat,
}

impl OutputMode {
    /// Name of the registered formatter for this mode
    pub fn format_name(&self) -> &'static str {
        match self {
            OutputMode::Tree => "tree",
            OutputMode::Dat => "dat",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_name())
    }
}

impl FromStr for OutputMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(OutputMode::Tree),
            "dat" => Ok(OutputMode::Dat),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }
}

/// Registry of fragment formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any previous one with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(
        &self,
        fragments: &[WordFragment],
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(fragments)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry with `tree` (using `emphasis` on the word line) and `dat`
    pub fn with_emphasis(emphasis: Emphasis) -> Self {
        let mut registry = Self::new();
        registry.register(TreeFormatter::new(emphasis));
        registry.register(DatFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_emphasis(Emphasis::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
