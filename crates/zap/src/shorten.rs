use crate::client::{ShortenClient, Shortener};
use crate::config::Config;
use crate::history::format_entry_lines;
use crate::prelude::{println, *};
use chrono::Local;
use colored::Colorize;
use zap_core::history::{format_timestamp, HistoryEntry, HistoryStore};
use zap_core::validate::is_valid_url;

#[derive(Debug, clap::Args)]
pub struct ShortenOptions {
    /// The URL to shorten (e.g., https://www.google.com)
    pub url: String,
}

/// Module entry point
pub async fn run(options: ShortenOptions, config: &Config) -> Result<()> {
    let client = ShortenClient::new(config)?;
    let store = HistoryStore::new(&config.history_file);

    let entry = shorten_url_data(&options.url, &client, &store).await?;

    println!("{}", format_shorten_text(&entry));

    Ok(())
}

/// Validate, shorten and record a single URL
///
/// Nothing is written to the history unless the service returned a short URL.
pub async fn shorten_url_data<S: Shortener>(
    url: &str,
    shortener: &S,
    store: &HistoryStore,
) -> Result<HistoryEntry> {
    if !is_valid_url(url) {
        log::debug!("Rejected invalid URL: {url}");
        return Err(Error::InvalidUrl.into());
    }

    let short_url = shortener.shorten(url).await.map_err(Error::from)?;
    let entry = HistoryEntry::new(url, short_url, format_timestamp(&Local::now()));

    let count = store
        .save(entry.clone())
        .context("Failed to save URL history")?;
    log::debug!(
        "Saved entry {} to {} ({count} entries)",
        entry.id,
        store.path().display()
    );

    Ok(entry)
}

fn format_shorten_text(entry: &HistoryEntry) -> String {
    format!(
        "{}\n{}",
        "Shortened URL Details:".bright_cyan().bold(),
        format_entry_lines(entry)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use zap_core::shorten::ShortenFailure;

    struct StaticShortener(Result<String, ShortenFailure>);

    impl Shortener for StaticShortener {
        async fn shorten(&self, _url: &str) -> Result<String, ShortenFailure> {
            self.0.clone()
        }
    }

    fn create_test_store(temp_dir: &TempDir) -> HistoryStore {
        HistoryStore::new(temp_dir.path().join("url_history.json"))
    }

    #[tokio::test]
    async fn test_shorten_saves_exactly_one_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let shortener = StaticShortener(Ok("https://tinyurl.com/abc".to_string()));

        shorten_url_data("https://first.com", &shortener, &store)
            .await
            .unwrap();
        let before = store.load().unwrap().len();

        let entry = shorten_url_data("https://www.google.com", &shortener, &store)
            .await
            .unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), before + 1);
        assert_eq!(entries.last().unwrap(), &entry);
        assert_eq!(entry.original_url, "https://www.google.com");
        assert_eq!(entry.short_url, "https://tinyurl.com/abc");
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let shortener = StaticShortener(Ok("https://tinyurl.com/abc".to_string()));

        let err = shorten_url_data("not-a-url", &shortener, &store)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>().unwrap().to_string(),
            "Invalid URL. Please provide a valid URL (e.g., https://www.google.com)."
        );
        assert!(store.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shorten_status_failure_saves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let shortener = StaticShortener(Err(ShortenFailure::Status(503)));

        let err = shorten_url_data("https://x.com", &shortener, &store)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ShortenStatus(503))
        ));
        assert!(store.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shorten_transport_failure() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let shortener = StaticShortener(Err(ShortenFailure::Transport(
            "operation timed out".to_string(),
        )));

        let err = shorten_url_data("https://x.com", &shortener, &store)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>().unwrap().to_string(),
            "Could not connect to the shortening API. Details: operation timed out"
        );
    }

    #[test]
    fn test_format_shorten_text() {
        let entry = HistoryEntry::new("https://x.com", "https://tinyurl.com/abc", "now");

        let formatted = format_shorten_text(&entry);

        assert!(formatted.contains("Shortened URL Details:"));
        assert!(formatted.contains(&entry.id));
        assert!(formatted.contains("https://tinyurl.com/abc"));
        assert_eq!(formatted.lines().count(), 5);
    }
}
