//! Compiled lexicons
//!
//! A [`Lexicon`] is an ordered, read-only list of entries built once from `(label, meaning)`
//! rows. Entry indices are stable and only used to order tie sets deterministically.
//! Roots and suffixes share the same container and differ only in their pattern type.

pub mod loader;

use crate::rootword::pattern::{Pattern, PatternError, RootPattern, SuffixPattern};
use std::fmt;
use thiserror::Error;

/// Which table a lexicon (or a failing label) comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconKind {
    Roots,
    Suffixes,
}

impl fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconKind::Roots => write!(f, "roots"),
            LexiconKind::Suffixes => write!(f, "suffixes"),
        }
    }
}

/// Errors while building a lexicon from rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("row {row}: {source}")]
    InvalidLabel {
        row: usize,
        #[source]
        source: PatternError,
    },
}

/// One compiled lexicon row
#[derive(Debug, Clone)]
pub struct LexiconEntry<P> {
    label: String,
    meaning: String,
    pattern: P,
}

impl<P> LexiconEntry<P> {
    /// Canonical (trimmed, lower-cased) label
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn pattern(&self) -> &P {
        &self.pattern
    }
}

/// Ordered list of compiled entries
#[derive(Debug, Clone)]
pub struct Lexicon<P> {
    entries: Vec<LexiconEntry<P>>,
}

pub type RootLexicon = Lexicon<RootPattern>;
pub type SuffixLexicon = Lexicon<SuffixPattern>;

impl<P: Pattern> Lexicon<P> {
    /// Build a lexicon from `(label, meaning)` rows, compiling every label.
    ///
    /// The first malformed label aborts the build. `row` in the error is 0-based.
    pub fn from_rows<I, L, M>(rows: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (L, M)>,
        L: AsRef<str>,
        M: AsRef<str>,
    {
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(row, (label, meaning))| {
                let label = canonical_label(label.as_ref());
                let pattern = P::compile(&label)
                    .map_err(|source| LexiconError::InvalidLabel { row, source })?;
                Ok(LexiconEntry {
                    label,
                    meaning: meaning.as_ref().trim().to_string(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Lexicon { entries })
    }

    pub fn kind(&self) -> LexiconKind {
        P::KIND
    }
}

impl<P> Lexicon<P> {
    /// A lexicon with no entries; nothing ever matches against it.
    pub fn empty() -> Self {
        Lexicon {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&LexiconEntry<P>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry<P>> {
        self.entries.iter()
    }

    /// Meaning of the entry at `index`, or `""` for an index this lexicon never produced.
    pub fn meaning_of(&self, index: usize) -> &str {
        self.get(index).map_or("", LexiconEntry::meaning)
    }
}

fn canonical_label(label: &str) -> String {
    label.trim().to_lowercase()
}
