//! Root and suffix scanning
//!
//! The root scan walks the word left to right. At each cursor position every root is
//! tried; the longest matches (possibly several entries with the same maximal span)
//! form a tie set. The tie set is kept when it spans at least two characters, or when it
//! sits at the very start of the word. Either way the cursor jumps past the matched span,
//! so a rejected one-letter match is not retried one character later.
//!
//! The suffix scan runs once, over whatever the root scan left at the end of the word,
//! and keeps the suffixes that consume the most characters.
//!
//! Offsets are byte offsets. Lexicons are lower-case Latin, so for any word they can
//! match these coincide with character offsets.

use crate::rootword::lexicon::Lexicon;
use crate::rootword::pattern::{PrefixMatcher, SuffixMatcher};
use std::ops::Range;
use tracing::debug;

/// Half-open span `[start, end)` of the scanned text matched by one lexicon entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub entry_index: usize,
}

impl Match {
    pub fn new(start: usize, end: usize, entry_index: usize) -> Self {
        Match {
            start,
            end,
            entry_index,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Greedy longest-match scan of `word` against the root lexicon.
///
/// Matches come out with non-decreasing `start`. Members of a tie set share a span and
/// are listed in reverse lexicon order.
pub fn find_roots<P: PrefixMatcher>(word: &str, roots: &Lexicon<P>) -> Vec<Match> {
    let mut result = Vec::new();
    let mut i = 0;

    while i < word.len() {
        let candidates: Vec<Match> = roots
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                entry
                    .pattern()
                    .match_at(word, i)
                    .map(|len| Match::new(i, i + len, index))
            })
            .collect();

        let Some(max_end) = candidates.iter().map(|m| m.end).max() else {
            i = next_char_boundary(word, i);
            continue;
        };

        let diff = max_end - i;
        if diff >= 2 || i == 0 {
            let before = result.len();
            result.extend(candidates.iter().rev().filter(|m| m.end == max_end));
            debug!(
                start = i,
                end = max_end,
                ties = result.len() - before,
                "root tie set accepted"
            );
        } else {
            debug!(start = i, end = max_end, "short interior root skipped");
        }

        i += diff.max(1);
    }

    result
}

/// Longest end-anchored suffix match(es) in `tail`, with offsets relative to `tail`.
///
/// Every returned match has the same span. Empty when no suffix matches.
pub fn find_suffix<P: SuffixMatcher>(tail: &str, suffixes: &Lexicon<P>) -> Vec<Match> {
    let matches: Vec<Match> = suffixes
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            entry
                .pattern()
                .find_end_anchored(tail)
                .map(|span| Match::new(span.start, span.end, index))
        })
        .collect();

    let Some(min_start) = matches.iter().map(|m| m.start).min() else {
        return Vec::new();
    };

    let ties: Vec<Match> = matches
        .into_iter()
        .filter(|m| m.start == min_start)
        .collect();
    debug!(
        start = min_start,
        end = tail.len(),
        ties = ties.len(),
        "suffix selected"
    );
    ties
}

fn next_char_boundary(text: &str, i: usize) -> usize {
    text[i..]
        .chars()
        .next()
        .map_or(text.len(), |c| i + c.len_utf8())
}
