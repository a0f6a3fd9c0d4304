//! Word-list reading.

use std::fs;
use std::path::Path;

use super::BatchError;

/// Split text into words, one per line.
///
/// Trailing whitespace is stripped and lines of one character or fewer are
/// dropped, so blank lines are tolerated.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| line.chars().count() > 1)
        .map(str::to_owned)
        .collect()
}

/// Read a word list from a file.
pub fn read_words(path: &Path) -> Result<Vec<String>, BatchError> {
    let text = fs::read_to_string(path).map_err(|source| BatchError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_words(&text))
}
