//! Loading a controlled vocabulary.
//!
//! A vocabulary is plain text with one candidate per line. Order is kept,
//! since it decides ties, and so are duplicates.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for reading a vocabulary
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The vocabulary file could not be opened
    #[error("Could not open vocabulary {}: {}", .0.display(), .1)]
    Open(PathBuf, #[source] std::io::Error),
    /// Reading a line failed
    #[error("Error reading vocabulary at line {0}: {1}")]
    Read(usize, #[source] std::io::Error),
}

/// Read candidates from `source`, one per line, skipping blank lines.
///
/// Candidates are kept verbatim, surrounding whitespace included.
pub fn read_candidates<R: BufRead>(source: R) -> Result<Vec<String>, ReaderError> {
    let mut candidates = Vec::new();
    for (lineno, line) in source.lines().enumerate() {
        let line = line.map_err(|e| ReaderError::Read(lineno + 1, e))?;
        if line.trim().is_empty() {
            continue;
        }
        candidates.push(line);
    }
    trace!("read {} candidates", candidates.len());
    Ok(candidates)
}

/// Read candidates from the file at `path`. See [`read_candidates`].
pub fn read_candidates_from_file(path: impl AsRef<Path>) -> Result<Vec<String>, ReaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReaderError::Open(path.to_path_buf(), e))?;
    debug!("reading vocabulary from {}", path.display());
    read_candidates(BufReader::new(file))
}
