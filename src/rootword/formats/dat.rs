//! Tab-separated span rows
//!
//! One row per root or suffix fragment, tie siblings included, in fragment order:
//!
//!     0..3<TAB>bio<TAB>life
//!     3..7<TAB>logy<TAB>study of
//!
//! Fillers produce no row.

use crate::rootword::formats::{FormatError, Formatter};
use crate::rootword::fragment::WordFragment;

pub fn to_dat_str(fragments: &[WordFragment]) -> String {
    fragments
        .iter()
        .filter(|f| !f.is_filler())
        .map(|f| format!("{}..{}\t{}\t{}\n", f.start, f.end, f.text, f.meaning))
        .collect()
}

/// Formatter implementation for the dat format
pub struct DatFormatter;

impl Formatter for DatFormatter {
    fn name(&self) -> &str {
        "dat"
    }

    fn serialize(&self, fragments: &[WordFragment]) -> Result<String, FormatError> {
        Ok(to_dat_str(fragments))
    }

    fn description(&self) -> &str {
        "Tab-separated span, text and meaning rows"
    }
}
