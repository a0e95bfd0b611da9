//! Log file access.
//!
//! The file is memory-mapped and split on `\n`. Lines are decoded as UTF-8
//! when valid; anything else is read as Windows-1252, which is what older
//! dedicated servers write for player names with accents.

use std::borrow::Cow;
use std::fs::File;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use memchr::memchr_iter;
use memmap2::Mmap;
use thiserror::Error;

/// Failure to read the input. Fatal: nothing is parsed.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A memory-mapped log file.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    // None for an empty file, which cannot be mapped on every platform
    mmap: Option<Mmap>,
}

impl LogFile {
    pub fn open(path: &Path) -> Result<Self, IngestError> {
        let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
        let len = file.metadata().map_err(|e| IngestError::io(path, e))?.len();

        let mmap = if len == 0 {
            None
        } else {
            // The log is only read; the mapping lives as long as this struct.
            Some(unsafe { Mmap::map(&file) }.map_err(|e| IngestError::io(path, e))?)
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or_default()
    }

    /// Decoded lines with their 1-based line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (u64, Cow<'_, str>)> {
        let bytes = self.bytes();
        line_ranges(bytes)
            .into_iter()
            .enumerate()
            .map(move |(idx, (start, end))| (idx as u64 + 1, decode_line(&bytes[start..end])))
    }
}

/// Byte ranges of every line, empty lines included so that line numbers
/// match what an editor shows. A trailing newline does not start a new line.
pub fn line_ranges(bytes: &[u8]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        ranges.push((start, end));
        start = end + 1;
    }
    if start < bytes.len() {
        ranges.push((start, bytes.len()));
    }
    ranges
}

pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(line) => Cow::Borrowed(line),
        Err(_) => WINDOWS_1252.decode(bytes).0,
    }
}
