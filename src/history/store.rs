//! History storage.
//!
//! Stores are append-only: `append` adds one line, `read_all` returns
//! every line in write order. A store that was never written reads as
//! empty rather than failing. Bytes that are not UTF-8 read back as
//! U+FFFD, so one damaged line never hides the rest.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

use super::entry::HistoryEntry;

/// Append-only record of past rounds.
pub trait HistoryStore {
    /// Append one entry.
    fn append(&mut self, entry: &HistoryEntry) -> Result<()>;

    /// Read every stored line verbatim, oldest first.
    fn read_all(&self) -> Result<Vec<String>>;

    /// Read and parse every stored line.
    fn entries(&self) -> Result<Vec<HistoryEntry>> {
        self.read_all()?.iter().map(|line| line.parse()).collect()
    }
}

/// History kept in a plain text file.
///
/// The file is opened and closed on every call; no handle is held.
#[derive(Clone, Debug)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    /// Create a store backed by `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistory {
    fn append(&mut self, entry: &HistoryEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(Error::HistoryWrite)?;
        writeln!(file, "{entry}").map_err(Error::HistoryWrite)
    }

    fn read_all(&self) -> Result<Vec<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::HistoryUnavailable(e)),
        };
        Ok(split_lines(&bytes))
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line and the empty
/// piece after a final newline.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

/// History kept in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    lines: Vec<String>,
}

impl MemoryHistory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, entry: &HistoryEntry) -> Result<()> {
        self.lines.push(entry.to_string());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
