//! Fragment assembly
//!
//! Turns the root matches of a word, plus one suffix scan over the unmatched tail, into
//! the ordered fragment sequence the renderers consume. Unmatched stretches become
//! [`FragmentKind::Filler`] fragments, so the spans always tile the whole word. Tie set
//! members each get their own fragment with the same span.

use crate::rootword::lexicon::Lexicon;
use crate::rootword::pattern::SuffixMatcher;
use crate::rootword::segmentation::{find_suffix, Match};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Filler,
    Root,
    Suffix,
}

/// A labeled span of the analyzed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFragment {
    pub kind: FragmentKind,
    pub text: String,
    /// Empty for fillers
    pub meaning: String,
    pub start: usize,
    pub end: usize,
}

impl WordFragment {
    pub fn filler(word: &str, span: Range<usize>) -> Self {
        Self::new(FragmentKind::Filler, word, span, String::new())
    }

    pub fn root(word: &str, span: Range<usize>, meaning: impl Into<String>) -> Self {
        Self::new(FragmentKind::Root, word, span, meaning.into())
    }

    pub fn suffix(word: &str, span: Range<usize>, meaning: impl Into<String>) -> Self {
        Self::new(FragmentKind::Suffix, word, span, meaning.into())
    }

    fn new(kind: FragmentKind, word: &str, span: Range<usize>, meaning: String) -> Self {
        WordFragment {
            kind,
            text: word[span.clone()].to_string(),
            meaning,
            start: span.start,
            end: span.end,
        }
    }

    pub fn is_filler(&self) -> bool {
        self.kind == FragmentKind::Filler
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn same_span(&self, other: &WordFragment) -> bool {
        self.start == other.start && self.end == other.end
    }
}

/// Build the fragment sequence for `word`.
///
/// `root_matches` must come from [`find_roots`](crate::rootword::segmentation::find_roots)
/// over `word` with the `roots` lexicon; the suffix scan runs here, over the text after
/// the last root.
pub fn assemble<R, S: SuffixMatcher>(
    word: &str,
    roots: &Lexicon<R>,
    root_matches: &[Match],
    suffixes: &Lexicon<S>,
) -> Vec<WordFragment> {
    let mut fragments = Vec::new();
    let mut prev_end = 0;

    for m in root_matches {
        if m.start > prev_end {
            fragments.push(WordFragment::filler(word, prev_end..m.start));
        }
        fragments.push(WordFragment::root(
            word,
            m.span(),
            roots.meaning_of(m.entry_index),
        ));
        prev_end = m.end;
    }

    if prev_end < word.len() {
        let ties = find_suffix(&word[prev_end..], suffixes);
        match ties.first() {
            Some(first) => {
                let span = prev_end + first.start..prev_end + first.end;
                if span.start > prev_end {
                    fragments.push(WordFragment::filler(word, prev_end..span.start));
                }
                for m in &ties {
                    fragments.push(WordFragment::suffix(
                        word,
                        span.clone(),
                        suffixes.meaning_of(m.entry_index),
                    ));
                }
            }
            None => fragments.push(WordFragment::filler(word, prev_end..word.len())),
        }
    }

    fragments
}
