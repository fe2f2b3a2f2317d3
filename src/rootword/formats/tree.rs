//! Tree formatter for fragment sequences
//!
//! One annotation line per root or suffix, followed by the word itself with matched
//! parts emphasized. Every annotated fragment owns a column: a vertical guide runs from
//! its annotation line down to the word line. Tie set siblings share their column and
//! hang off it with a branch joint.
//!
//! Example for `biology`, and for `pedal` where two `ped` roots tie:
//!
//!     ┌───────── life
//!     │   ┌───── study of
//!     bio logy
//!
//!     ┌──────── foot
//!     ├──────── child
//!     ped al
//!
//! Rules are sized as `word length + fragment count - prefix width`, which lines all the
//! meanings up in one column whatever the nesting depth.
//!
//! Glyphs:
//!     Corner (new column): ┌
//!     Branch (tie sibling): ├
//!     Guide: │
//!     Rule: ─

use crate::rootword::formats::{FormatError, Formatter};
use crate::rootword::fragment::WordFragment;
use colored::Colorize;
use serde::Deserialize;

const CORNER: char = '┌';
const BRANCH: char = '├';
const GUIDE: char = '│';
const RULE: char = '─';

/// How roots and suffixes are marked on the word line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Underline,
    Bold,
    /// No styling; output bytes are stable
    Plain,
}

impl Emphasis {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Emphasis::Underline => text.underline().to_string(),
            Emphasis::Bold => text.bold().to_string(),
            Emphasis::Plain => text.to_string(),
        }
    }
}

pub fn to_tree_str(fragments: &[WordFragment], emphasis: Emphasis) -> String {
    let Some(last) = fragments.last() else {
        return String::new();
    };
    let word_len = last.end;
    let fragment_count = fragments.len();

    let mut output = String::new();
    let mut prefix = String::new();
    let mut prev_start = 0;
    let mut first = true;

    for fragment in fragments.iter().filter(|f| !f.is_filler()) {
        let joint = if !first && fragment.start == prev_start {
            prefix.pop();
            BRANCH
        } else {
            let gap = fragment.start.saturating_sub(prev_start);
            prefix.extend(std::iter::repeat(' ').take(gap));
            CORNER
        };

        let rule_len = (word_len + fragment_count).saturating_sub(prefix.chars().count());
        let rule: String = std::iter::repeat(RULE).take(rule_len).collect();
        output.push_str(&format!("{prefix}{joint}{rule} {}\n", fragment.meaning));

        prefix.push(GUIDE);
        prev_start = fragment.start;
        first = false;
    }

    output.push_str(&word_line(fragments, emphasis));
    output.push('\n');
    output
}

/// Fragment texts separated by spaces; tie siblings after the first add nothing.
fn word_line(fragments: &[WordFragment], emphasis: Emphasis) -> String {
    let mut parts = Vec::new();
    let mut previous: Option<&WordFragment> = None;

    for fragment in fragments {
        if previous.is_some_and(|p| p.same_span(fragment)) {
            continue;
        }
        parts.push(if fragment.is_filler() {
            fragment.text.clone()
        } else {
            emphasis.apply(&fragment.text)
        });
        previous = Some(fragment);
    }

    parts.join(" ")
}

/// Formatter implementation for the tree format
pub struct TreeFormatter {
    emphasis: Emphasis,
}

impl TreeFormatter {
    pub fn new(emphasis: Emphasis) -> Self {
        TreeFormatter { emphasis }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(Emphasis::default())
    }
}

impl Formatter for TreeFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, fragments: &[WordFragment]) -> Result<String, FormatError> {
        Ok(to_tree_str(fragments, self.emphasis))
    }

    fn description(&self) -> &str {
        "Annotation tree above the word, matched parts emphasized"
    }
}
