//! Recently solved problems, most recent first.
//!
//! Entries are raw problem strings, deduplicated by exact equality and bounded
//! to [`MAX_HISTORY`]. Only problems that were solved should be recorded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on stored entries.
pub const MAX_HISTORY: usize = 8;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed history file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported history format version {0}")]
    UnsupportedVersion(u32),
}

/// On-disk envelope.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    entries: Vec<String>,
}

impl HistoryFile {
    const VERSION: u32 = 1;
}

/// Accepted on load: the current envelope, or a bare array of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryFileRepr {
    Envelope(HistoryFile),
    Legacy(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    limit: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY)
    }

    /// Create a store holding at most `limit` entries, clamped to `1..=MAX_HISTORY`.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.clamp(1, MAX_HISTORY),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by 1-based position, as shown to the user.
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    /// Move `problem` to the front, dropping any older copy and the oldest
    /// entries beyond the limit.
    pub fn record(&mut self, problem: &str) {
        self.entries.retain(|entry| entry != problem);
        self.entries.insert(0, problem.to_string());
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn from_entries(entries: Vec<String>, limit: usize) -> Self {
        let mut store = Self::with_limit(limit);
        // Oldest first so the file's ordering survives.
        for entry in entries.iter().rev() {
            store.record(entry);
        }
        store
    }

    /// Load from `path`. A missing file is an empty history.
    pub fn load(path: &Path, limit: usize) -> Result<Self, HistoryError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::with_limit(limit)),
            Err(e) => return Err(e.into()),
        };

        let entries = match serde_json::from_str::<HistoryFileRepr>(&content)? {
            HistoryFileRepr::Envelope(file) if file.version == HistoryFile::VERSION => {
                file.entries
            }
            HistoryFileRepr::Envelope(file) => {
                return Err(HistoryError::UnsupportedVersion(file.version))
            }
            HistoryFileRepr::Legacy(entries) => entries,
        };

        tracing::debug!(target: "history", path = %path.display(), entries = entries.len(), "loaded");
        Ok(Self::from_entries(entries, limit))
    }

    /// Like [`HistoryStore::load`], but an unreadable file is logged and
    /// treated as empty.
    pub fn load_or_default(path: &Path, limit: usize) -> Self {
        match Self::load(path, limit) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    target: "history",
                    path = %path.display(),
                    error = %e,
                    "could not read history, starting empty"
                );
                Self::with_limit(limit)
            }
        }
    }

    /// Atomic save: write to temp file then rename.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = HistoryFile {
            version: HistoryFile::VERSION,
            entries: self.entries.clone(),
        };
        let tmp = tmp_path(path);
        fs::write(&tmp, serde_json::to_string_pretty(&file)?)?;
        fs::rename(&tmp, path)?;

        tracing::debug!(target: "history", path = %path.display(), entries = self.len(), "saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
