//! Word analysis pipeline
//!
//! [`Analyzer`] owns the two lexicons for the duration of a run and chains the stages:
//!
//! 1. Root scan - greedy longest match over the whole word
//! 2. Assembly - fillers for the gaps, one suffix scan over the unmatched tail
//! 3. Rendering - a named format from the [`FormatRegistry`]
//!
//! ```rust
//! let analyzer = Analyzer::new(roots, suffixes);
//! let fragments = analyzer.analyze("biology");
//! let tree = analyzer.render("biology", "tree")?;
//! ```

use crate::rootword::config::RootwordConfig;
use crate::rootword::formats::{FormatError, FormatRegistry};
use crate::rootword::fragment::{assemble, WordFragment};
use crate::rootword::lexicon::loader::{load_roots, load_suffixes, LoaderError};
use crate::rootword::lexicon::{RootLexicon, SuffixLexicon};
use crate::rootword::segmentation::find_roots;
use thiserror::Error;

/// Errors while setting up or running an analysis
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Segments words against a root and a suffix lexicon
pub struct Analyzer {
    roots: RootLexicon,
    suffixes: SuffixLexicon,
    registry: FormatRegistry,
}

impl Analyzer {
    /// Analyzer with the default format registry
    pub fn new(roots: RootLexicon, suffixes: SuffixLexicon) -> Self {
        Self::with_registry(roots, suffixes, FormatRegistry::with_defaults())
    }

    pub fn with_registry(
        roots: RootLexicon,
        suffixes: SuffixLexicon,
        registry: FormatRegistry,
    ) -> Self {
        Analyzer {
            roots,
            suffixes,
            registry,
        }
    }

    /// Load both lexicons from the paths in `config`, with its word-line emphasis.
    pub fn from_config(config: &RootwordConfig) -> Result<Self, AnalyzeError> {
        let roots = load_roots(&config.lexicon.roots)?;
        let suffixes = load_suffixes(&config.lexicon.suffixes)?;
        Ok(Self::with_registry(
            roots,
            suffixes,
            FormatRegistry::with_emphasis(config.render.emphasis),
        ))
    }

    pub fn roots(&self) -> &RootLexicon {
        &self.roots
    }

    pub fn suffixes(&self) -> &SuffixLexicon {
        &self.suffixes
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Fragment sequence for `word`, covering it from start to end.
    pub fn analyze(&self, word: &str) -> Vec<WordFragment> {
        let root_matches = find_roots(word, &self.roots);
        assemble(word, &self.roots, &root_matches, &self.suffixes)
    }

    /// Analyze `word` and render it with the named format.
    pub fn render(&self, word: &str, format: &str) -> Result<String, FormatError> {
        // Fail on an unknown format before doing any work.
        if !self.registry.has(format) {
            return Err(FormatError::FormatNotFound(format.to_string()));
        }
        self.registry.serialize(&self.analyze(word), format)
    }
}
