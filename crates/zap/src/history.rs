use crate::config::Config;
use crate::prelude::{println, *};
use colored::Colorize;
use zap_core::history::{HistoryEntry, HistoryStore};

const SEPARATOR_WIDTH: usize = 40;

/// Module entry point
pub fn run(config: &Config) -> Result<()> {
    let store = HistoryStore::new(&config.history_file);
    log::debug!("Reading history from {}", store.path().display());

    let entries = store.load().context("Failed to load URL history")?;

    println!("{}", format_history_text(&entries));

    Ok(())
}

/// The four labelled lines describing one entry
pub fn format_entry_lines(entry: &HistoryEntry) -> String {
    format!(
        "  {}           {}\n  {} {}\n  {}    {}\n  {}    {}",
        "ID:".green(),
        entry.id.bright_white(),
        "Original URL:".green(),
        entry.original_url,
        "Short URL:".green(),
        entry.short_url.cyan().underline(),
        "Timestamp:".green(),
        entry.timestamp.bright_black()
    )
}

/// Convert the history to text, oldest entry first
fn format_history_text(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No URL shortening history found.".yellow().to_string();
    }

    let mut result = format!("{}", "URL Shortening History:".bright_cyan().bold());
    for entry in entries {
        result.push('\n');
        result.push_str(&format_entry_lines(entry));
        result.push('\n');
        result.push_str(&"-".repeat(SEPARATOR_WIDTH));
    }

    result
}
