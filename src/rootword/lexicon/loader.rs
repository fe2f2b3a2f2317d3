//! CSV lexicon loading
//!
//! Lexicon files are CSV tables whose first row is a header. Only the first two columns
//! are read, as label and meaning; header names are not checked, so both the
//! `Root word,Meaning,...` and `Suffix,Meaning,...` layouts load the same way.
//!
//! A row with a blank label continues the previous label (suffix tables list several
//! meanings for one suffix this way). This is the only module in the crate that reads
//! files.

use crate::rootword::lexicon::{Lexicon, LexiconError, RootLexicon, SuffixLexicon};
use crate::rootword::pattern::Pattern;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading a lexicon file
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot open lexicon '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected a label and a meaning column")]
    MissingColumns { line: u64 },
    #[error("line {line}: blank label with no previous row to continue")]
    OrphanContinuation { line: u64 },
    #[error("lexicon '{}' is invalid: {source}", .path.display())]
    Lexicon {
        path: PathBuf,
        #[source]
        source: LexiconError,
    },
}

/// Read `(label, meaning)` rows from CSV, resolving continuation rows.
pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<(String, String)>, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<(String, String)> = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        // Fully blank lines carry no data.
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let (Some(label), Some(meaning)) = (record.get(0), record.get(1)) else {
            return Err(LoaderError::MissingColumns { line });
        };

        let label = if label.trim().is_empty() {
            let previous = rows
                .last()
                .map(|(label, _)| label.clone())
                .ok_or(LoaderError::OrphanContinuation { line })?;
            debug!(line, label = %previous, "continuation row");
            previous
        } else {
            label.trim().to_string()
        };

        rows.push((label, meaning.trim().to_string()));
    }

    Ok(rows)
}

/// Load and compile a lexicon from a CSV file.
pub fn load_lexicon<P: Pattern>(path: impl AsRef<Path>) -> Result<Lexicon<P>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_rows(file)?;
    let lexicon = Lexicon::<P>::from_rows(rows).map_err(|source| LoaderError::Lexicon {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        kind = %lexicon.kind(),
        entries = lexicon.len(),
        path = %path.display(),
        "lexicon loaded"
    );
    Ok(lexicon)
}

pub fn load_roots(path: impl AsRef<Path>) -> Result<RootLexicon, LoaderError> {
    load_lexicon(path)
}

pub fn load_suffixes(path: impl AsRef<Path>) -> Result<SuffixLexicon, LoaderError> {
    load_lexicon(path)
}
