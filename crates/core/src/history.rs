//! Shortening history storage
//!
//! The history file is a JSON array of [`HistoryEntry`] values in the order
//! they were created. Saving reads the whole array, appends one entry and
//! rewrites the file. There is no locking, so two concurrent writers can
//! lose an entry.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// History file used when none is configured
pub const DEFAULT_HISTORY_FILE: &str = "url_history.json";

/// `October 19, 2026 03:04:05 PM`
pub const TIMESTAMP_FORMAT: &str = "%B %d, %Y %I:%M:%S %p";

/// One completed shortening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub timestamp: String,
}

impl HistoryEntry {
    /// Create an entry with a fresh random id
    pub fn new(
        original_url: impl Into<String>,
        short_url: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            original_url: original_url.into(),
            short_url: short_url.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Format a point in time the way history entries record it
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Error type for history operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to access history file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("History file {} is not a JSON array of entries: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parse the contents of a history file
///
/// Blank content is an empty history.
pub fn parse_history(content: &str) -> Result<Vec<HistoryEntry>, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(content)
}

/// Render a history as the file stores it (pretty JSON, two-space indent)
pub fn serialize_history(entries: &[HistoryEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// History file handle
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every entry, oldest first
    ///
    /// A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        parse_history(&content).map_err(|source| HistoryError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Append `entry` and rewrite the whole file
    ///
    /// Returns the number of entries in the file after the write. A file
    /// that cannot be parsed is left untouched.
    pub fn save(&self, entry: HistoryEntry) -> Result<usize, HistoryError> {
        let mut entries = self.load()?;
        entries.push(entry);

        let content = serialize_history(&entries).map_err(|source| HistoryError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(entries.len())
    }
}
