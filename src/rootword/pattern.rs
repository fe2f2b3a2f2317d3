//! Label grammar compilation
//!
//! Lexicon labels use a compact spelling-variant grammar:
//!
//!     label = alt (',' alt)*
//!     alt   = literal | base '/' tail ('/' tail)*
//!
//! Every alternative of a label maps to the same meaning. A slashed alternative matches
//! its base alone or its base followed by exactly one tail, so `phon/o/e/y` accepts
//! `phon`, `phono`, `phone` and `phony`.
//!
//! Roots compile to a [`RootPattern`], which answers "does this label match at position
//! p, and how long is the longest match?". Suffixes compile to a [`SuffixPattern`],
//! which only matches at the very end of the searched text. Suffix labels may carry a
//! leading `-` per alternative (`-logy, -ology`).
//!
//! Both are backed by `regex`, but the rest of the crate only sees the
//! [`PrefixMatcher`] and [`SuffixMatcher`] capabilities.

use crate::rootword::lexicon::LexiconKind;
use regex::Regex;
use std::ops::Range;
use thiserror::Error;

/// Failure to compile a lexicon label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {table} label '{label}': {reason}")]
pub struct PatternError {
    pub label: String,
    pub table: LexiconKind,
    pub reason: PatternErrorReason,
}

/// What exactly was wrong with a label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternErrorReason {
    #[error("label is empty")]
    EmptyLabel,
    #[error("alternative {0} is empty")]
    EmptyAlternative(usize),
    #[error("alternative '{0}' has nothing before '/'")]
    EmptyBase(String),
    #[error("alternative '{0}' has an empty variant after '/'")]
    EmptyTail(String),
    #[error("generated expression is invalid: {0}")]
    Regex(String),
}

/// Matches a label at an exact position of a text.
pub trait PrefixMatcher {
    /// Length of the longest match starting exactly at `pos`, if any.
    fn match_at(&self, text: &str, pos: usize) -> Option<usize>;
}

/// Finds a label at the end of a text.
pub trait SuffixMatcher {
    /// Span of the longest match that ends at `text.len()`, if any.
    fn find_end_anchored(&self, text: &str) -> Option<Range<usize>>;
}

/// A pattern type that can be built from a lexicon label.
pub trait Pattern: Sized {
    /// The table this pattern kind belongs to, used in error reports.
    const KIND: LexiconKind;

    fn compile(label: &str) -> Result<Self, PatternError>;
}

/// Compiled root label: one anchored expression per alternative.
#[derive(Debug, Clone)]
pub struct RootPattern {
    source: String,
    alternatives: Vec<Regex>,
}

impl RootPattern {
    /// Expression text, alternatives joined by `|` (e.g. `phon[oey]?`).
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl PrefixMatcher for RootPattern {
    fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        let rest = text.get(pos..)?;
        self.alternatives
            .iter()
            .filter_map(|re| re.find(rest))
            .map(|m| m.end())
            .filter(|&len| len > 0)
            .max()
    }
}

impl Pattern for RootPattern {
    const KIND: LexiconKind = LexiconKind::Roots;

    fn compile(label: &str) -> Result<Self, PatternError> {
        compile_root(label)
    }
}

/// Compiled suffix label, end-anchored.
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    regex: Regex,
}

impl SuffixPattern {
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

impl SuffixMatcher for SuffixPattern {
    fn find_end_anchored(&self, text: &str) -> Option<Range<usize>> {
        // Leftmost start wins, which is the longest suffix since every match ends at $.
        self.regex
            .find(text)
            .map(|m| m.range())
            .filter(|r| !r.is_empty())
    }
}

impl Pattern for SuffixPattern {
    const KIND: LexiconKind = LexiconKind::Suffixes;

    fn compile(label: &str) -> Result<Self, PatternError> {
        compile_suffix(label)
    }
}

/// Compile a root label into a prefix matcher.
pub fn compile_root(label: &str) -> Result<RootPattern, PatternError> {
    let err = |reason| PatternError {
        label: label.to_string(),
        table: LexiconKind::Roots,
        reason,
    };

    let alts = split_alternatives(label).map_err(err)?;
    let mut sources = Vec::with_capacity(alts.len());
    let mut alternatives = Vec::with_capacity(alts.len());

    for alt in alts {
        let expr = root_alternative(alt).map_err(err)?;
        let regex = Regex::new(&format!("^(?:{expr})"))
            .map_err(|e| err(PatternErrorReason::Regex(e.to_string())))?;
        sources.push(expr);
        alternatives.push(regex);
    }

    Ok(RootPattern {
        source: sources.join("|"),
        alternatives,
    })
}

/// Compile a suffix label into an end-anchored matcher.
pub fn compile_suffix(label: &str) -> Result<SuffixPattern, PatternError> {
    let err = |reason| PatternError {
        label: label.to_string(),
        table: LexiconKind::Suffixes,
        reason,
    };

    let alts = split_alternatives(label).map_err(err)?;
    let mut literals = Vec::with_capacity(alts.len());
    for (i, alt) in alts.iter().enumerate() {
        let literal = alt.strip_prefix('-').unwrap_or(alt).trim();
        if literal.is_empty() {
            return Err(err(PatternErrorReason::EmptyAlternative(i)));
        }
        literals.push(regex::escape(literal));
    }

    let expr = match literals.as_slice() {
        [single] => format!("{single}$"),
        many => format!("(?:{})$", many.join("|")),
    };
    let regex = Regex::new(&expr).map_err(|e| err(PatternErrorReason::Regex(e.to_string())))?;

    Ok(SuffixPattern { regex })
}

fn split_alternatives(label: &str) -> Result<Vec<&str>, PatternErrorReason> {
    if label.trim().is_empty() {
        return Err(PatternErrorReason::EmptyLabel);
    }
    let alts: Vec<&str> = label.split(',').map(str::trim).collect();
    match alts.iter().position(|alt| alt.is_empty()) {
        Some(i) => Err(PatternErrorReason::EmptyAlternative(i)),
        None => Ok(alts),
    }
}

/// Expression for one root alternative, without anchors.
fn root_alternative(alt: &str) -> Result<String, PatternErrorReason> {
    let mut parts = alt.split('/');
    let base = parts.next().unwrap_or_default();
    let mut tails: Vec<&str> = parts.collect();

    if tails.is_empty() {
        return Ok(regex::escape(alt));
    }
    if base.is_empty() {
        return Err(PatternErrorReason::EmptyBase(alt.to_string()));
    }
    if tails.iter().any(|t| t.is_empty()) {
        return Err(PatternErrorReason::EmptyTail(alt.to_string()));
    }

    let base = regex::escape(base);
    let single_chars = tails.iter().all(|t| t.chars().count() == 1);

    Ok(match (tails.len(), single_chars) {
        (1, true) => format!("{base}{}?", regex::escape(tails[0])),
        (_, true) => {
            let class: String = tails.iter().map(|t| regex::escape(t)).collect();
            format!("{base}[{class}]?")
        }
        _ => {
            // Alternation is leftmost-first, so try longer tails first.
            tails.sort_by_key(|t| std::cmp::Reverse(t.len()));
            let group: Vec<String> = tails.iter().map(|t| regex::escape(t)).collect();
            format!("{base}(?:{})?", group.join("|"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(pattern: &RootPattern, text: &str) -> Option<usize> {
        pattern.match_at(text, 0)
    }

    #[test]
    fn test_literal_root() {
        let p = compile_root("bio").unwrap();
        assert_eq!(p.source(), "bio");
        assert_eq!(prefixes(&p, "biology"), Some(3));
        assert_eq!(prefixes(&p, "abio"), None);
        assert_eq!(p.match_at("abio", 1), Some(3));
    }

    #[test]
    fn test_single_char_tail_is_optional() {
        let p = compile_root("graph/y").unwrap();
        assert_eq!(p.source(), "graphy?");
        assert_eq!(prefixes(&p, "graph"), Some(5));
        assert_eq!(prefixes(&p, "graphy"), Some(6));
        assert_eq!(prefixes(&p, "graphic"), Some(5));
    }

    #[test]
    fn test_char_class_tails() {
        let p = compile_root("phon/o/e/y").unwrap();
        assert_eq!(p.source(), "phon[oey]?");
        assert_eq!(prefixes(&p, "phon"), Some(4));
        assert_eq!(prefixes(&p, "phono"), Some(5));
        assert_eq!(prefixes(&p, "phone"), Some(5));
        assert_eq!(prefixes(&p, "phony"), Some(5));
        assert_eq!(prefixes(&p, "phona"), Some(4));
        assert_eq!(prefixes(&p, "pho"), None);
    }

    #[test]
    fn test_group_tails_prefer_longest() {
        let p = compile_root("rrh/ea/oea/ag").unwrap();
        assert_eq!(prefixes(&p, "rrhoea"), Some(6));
        assert_eq!(prefixes(&p, "rrhea"), Some(5));
        assert_eq!(prefixes(&p, "rrhag"), Some(5));
        assert_eq!(prefixes(&p, "rrhx"), Some(3));

        let overlapping = compile_root("log/o/ology").unwrap();
        assert_eq!(prefixes(&overlapping, "logology"), Some(8));
    }

    #[test]
    fn test_alternatives_take_longest() {
        let p = compile_root("chrom/o, chromat/o").unwrap();
        assert_eq!(p.source(), "chromo?|chromato?");
        assert_eq!(prefixes(&p, "chromatography"), Some(8));
        assert_eq!(prefixes(&p, "chromosome"), Some(6));

        let p = compile_root("oxi, oxy").unwrap();
        assert_eq!(prefixes(&p, "oxygen"), Some(3));
        assert_eq!(prefixes(&p, "oxidize"), Some(3));
    }

    #[test]
    fn test_match_at_out_of_range() {
        let p = compile_root("bio").unwrap();
        assert_eq!(p.match_at("bio", 3), None);
        assert_eq!(p.match_at("bio", 10), None);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let p = compile_root("a.b").unwrap();
        assert_eq!(prefixes(&p, "a.b"), Some(3));
        assert_eq!(prefixes(&p, "axb"), None);
    }

    #[test]
    fn test_suffix_single() {
        let p = compile_suffix("-logy").unwrap();
        assert_eq!(p.source(), "logy$");
        assert_eq!(p.find_end_anchored("logy"), Some(0..4));
        assert_eq!(p.find_end_anchored("biology"), Some(3..7));
        assert_eq!(p.find_end_anchored("logyx"), None);
    }

    #[test]
    fn test_suffix_alternatives_take_longest() {
        let p = compile_suffix("-logy, -ology").unwrap();
        assert_eq!(p.source(), "(?:logy|ology)$");
        assert_eq!(p.find_end_anchored("biology"), Some(2..7));
        assert_eq!(p.find_end_anchored("ology"), Some(0..5));
    }

    #[test]
    fn test_suffix_without_dash() {
        let p = compile_suffix("ism").unwrap();
        assert_eq!(p.find_end_anchored("realism"), Some(4..7));
    }

    #[test]
    fn test_empty_label() {
        let err = compile_root("  ").unwrap_err();
        assert_eq!(err.reason, PatternErrorReason::EmptyLabel);
        assert_eq!(err.table, LexiconKind::Roots);
    }

    #[test]
    fn test_empty_alternative() {
        let err = compile_root("bio,,vit").unwrap_err();
        assert_eq!(err.reason, PatternErrorReason::EmptyAlternative(1));

        let err = compile_suffix("-ism, -").unwrap_err();
        assert_eq!(err.reason, PatternErrorReason::EmptyAlternative(1));
        assert_eq!(err.table, LexiconKind::Suffixes);
        assert_eq!(err.label, "-ism, -");
    }

    #[test]
    fn test_slash_without_tail() {
        let err = compile_root("gen/").unwrap_err();
        assert_eq!(err.reason, PatternErrorReason::EmptyTail("gen/".to_string()));

        let err = compile_root("gen/o//e").unwrap_err();
        assert!(matches!(err.reason, PatternErrorReason::EmptyTail(_)));
    }

    #[test]
    fn test_slash_without_base() {
        let err = compile_root("/o").unwrap_err();
        assert_eq!(err.reason, PatternErrorReason::EmptyBase("/o".to_string()));
    }

    #[test]
    fn test_error_message_names_label_and_table() {
        let err = compile_root("gen/").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gen/"));
        assert!(message.contains("roots"));
    }
}
