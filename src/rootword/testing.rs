//! Test helpers
//!
//! Builders for small in-memory lexicons and a compact view of fragment sequences, shared
//! by the unit tests and the integration tests under `tests/`.
//!
//! Helpers panic on invalid input: a malformed label in a test fixture is a bug in the test.

use crate::rootword::formats::{Emphasis, FormatRegistry};
use crate::rootword::fragment::{FragmentKind, WordFragment};
use crate::rootword::lexicon::{RootLexicon, SuffixLexicon};
use crate::rootword::pipeline::Analyzer;

pub fn roots(rows: &[(&str, &str)]) -> RootLexicon {
    RootLexicon::from_rows(rows.iter().copied()).expect("test root labels to compile")
}

pub fn suffixes(rows: &[(&str, &str)]) -> SuffixLexicon {
    SuffixLexicon::from_rows(rows.iter().copied()).expect("test suffix labels to compile")
}

/// Analyzer over the given rows, rendering trees without styling
pub fn analyzer(root_rows: &[(&str, &str)], suffix_rows: &[(&str, &str)]) -> Analyzer {
    Analyzer::with_registry(
        roots(root_rows),
        suffixes(suffix_rows),
        FormatRegistry::with_emphasis(Emphasis::Plain),
    )
}

/// `(kind, start, end, meaning)` for each fragment
pub fn summarize(fragments: &[WordFragment]) -> Vec<(FragmentKind, usize, usize, &str)> {
    fragments
        .iter()
        .map(|f| (f.kind, f.start, f.end, f.meaning.as_str()))
        .collect()
}

/// Spans with duplicate tie-set spans collapsed to one column
pub fn columns(fragments: &[WordFragment]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = fragments.iter().map(|f| (f.start, f.end)).collect();
    spans.dedup();
    spans
}
