//! Batch shortening input and results
//!
//! A batch input file holds one URL per line. Every non-blank line yields
//! exactly one [`BatchOutcome`] and one line in the results file, so a
//! failure on one URL never hides the others.

use crate::history::HistoryEntry;
use crate::shorten::ShortenFailure;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Extract the URLs of a batch input file
///
/// Lines are trimmed and blank lines are skipped.
pub fn parse_batch_input(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Name of the results file for a batch started at `time`
pub fn output_file_name<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("shortened_urls_{}.txt", time.format("%Y%m%d_%H%M%S"))
}

/// Result of processing one batch line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Shortened {
        original_url: String,
        short_url: String,
        timestamp: String,
    },
    Invalid {
        url: String,
    },
    Failed {
        url: String,
        failure: ShortenFailure,
    },
}

impl BatchOutcome {
    /// Line written to the results file (without the newline)
    pub fn to_line(&self) -> String {
        match self {
            BatchOutcome::Shortened {
                original_url,
                short_url,
                timestamp,
            } => format!("Original: {original_url}, Short: {short_url}, Timestamp: {timestamp}"),
            BatchOutcome::Invalid { url } => format!("Invalid URL: {url}"),
            BatchOutcome::Failed { url, failure } => format!("Failed to shorten: {url} ({failure})"),
        }
    }
}

impl From<&HistoryEntry> for BatchOutcome {
    fn from(entry: &HistoryEntry) -> Self {
        BatchOutcome::Shortened {
            original_url: entry.original_url.clone(),
            short_url: entry.short_url.clone(),
            timestamp: entry.timestamp.clone(),
        }
    }
}

/// Per-kind counts for a finished batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub shortened: usize,
    pub invalid: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &BatchOutcome) {
        match outcome {
            BatchOutcome::Shortened { .. } => self.shortened += 1,
            BatchOutcome::Invalid { .. } => self.invalid += 1,
            BatchOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.shortened + self.invalid + self.failed
    }
}
