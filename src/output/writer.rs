//! Word list file writer

use crate::words::RankedWordList;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes the top `limit` words (all of them when 0), one per line
///
/// Returns the number of words written.
pub fn write_words<W: Write>(
    ranked: &RankedWordList,
    limit: usize,
    writer: &mut W,
) -> OutputResult<usize> {
    let entries = ranked.top(limit);
    for entry in entries {
        writeln!(writer, "{}", entry.word)?;
    }
    writer.flush()?;
    Ok(entries.len())
}

/// Writes the word list to a file, replacing any existing file
///
/// # Arguments
///
/// * `ranked` - Words in ranked order
/// * `output_path` - Destination file
/// * `limit` - Maximum number of words to write (0 for all)
///
/// # Returns
///
/// * `Ok(usize)` - Number of words written
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_wordlist(ranked: &RankedWordList, output_path: &Path, limit: usize) -> OutputResult<usize> {
    let to_write = ranked.top(limit).len();
    tracing::info!(
        "Saving {} unique words in {}",
        to_write,
        output_path.display()
    );

    let with_path = |source: std::io::Error| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    };

    let file = File::create(output_path).map_err(with_path)?;
    let mut writer = BufWriter::new(file);

    match write_words(ranked, limit, &mut writer) {
        Ok(written) => Ok(written),
        Err(OutputError::Io(source)) => Err(with_path(source)),
        Err(e) => Err(e),
    }
}
