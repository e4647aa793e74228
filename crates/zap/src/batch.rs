use crate::client::{ShortenClient, Shortener};
use crate::config::Config;
use crate::prelude::{println, *};
use chrono::Local;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use zap_core::batch::{output_file_name, parse_batch_input, BatchOutcome, BatchSummary};
use zap_core::history::{format_timestamp, HistoryEntry, HistoryStore};
use zap_core::validate::is_valid_url;

#[derive(Debug, clap::Args)]
pub struct BatchOptions {
    /// Path to a text file containing URLs (one per line)
    pub file: PathBuf,
}

/// Module entry point
pub async fn run(options: BatchOptions, config: &Config) -> Result<()> {
    run_in(options, config, Path::new(".")).await
}

/// Run a batch, writing the results file into `output_dir`
///
/// The results file is only created once the input and the client are
/// ready, so an early failure leaves nothing behind.
async fn run_in(options: BatchOptions, config: &Config, output_dir: &Path) -> Result<()> {
    let content = read_batch_file(&options.file)?;
    let urls = parse_batch_input(&content);
    if urls.is_empty() {
        return Err(Error::BatchFileEmpty.into());
    }

    let client = ShortenClient::new(config)?;
    let store = HistoryStore::new(&config.history_file);

    let output_path = output_dir.join(output_file_name(&Local::now()));
    let mut out = create_results_file(&output_path)?;

    println!("Processing {} URLs...", urls.len());

    let summary = shorten_batch(&urls, &client, &store, &mut out).await?;
    out.flush()
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("{}", format_summary(&summary));
    println!("Results saved to {}", output_path.display());

    Ok(())
}

fn create_results_file(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    Ok(BufWriter::new(file))
}

fn read_batch_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::BatchFileNotFound(path.display().to_string()).into());
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Shorten every URL in order, writing one results line per URL
///
/// Invalid URLs and service failures are recorded in `out` and processing
/// moves on to the next line. Only I/O errors on the history or results
/// file stop the batch.
pub async fn shorten_batch<S: Shortener, W: Write>(
    urls: &[&str],
    shortener: &S,
    store: &HistoryStore,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for url in urls {
        let outcome = shorten_line(url, shortener, store).await?;

        writeln!(out, "{}", outcome.to_line()).context("Failed to write batch results")?;
        summary.record(&outcome);
    }

    Ok(summary)
}

async fn shorten_line<S: Shortener>(
    url: &str,
    shortener: &S,
    store: &HistoryStore,
) -> Result<BatchOutcome> {
    if !is_valid_url(url) {
        log::debug!("Skipping invalid URL: {url}");
        return Ok(BatchOutcome::Invalid {
            url: url.to_string(),
        });
    }

    match shortener.shorten(url).await {
        Ok(short_url) => {
            let entry = HistoryEntry::new(url, short_url, format_timestamp(&Local::now()));
            store
                .save(entry.clone())
                .context("Failed to save URL history")?;

            println!(
                "{} {} -> {}",
                "Shortened:".green(),
                entry.original_url,
                entry.short_url.cyan()
            );

            Ok(BatchOutcome::from(&entry))
        }
        Err(failure) => {
            log::warn!("Failed to shorten {url}: {failure}");
            Ok(BatchOutcome::Failed {
                url: url.to_string(),
                failure,
            })
        }
    }
}

fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "{} shortened, {} invalid, {} failed ({} total)",
        summary.shortened.to_string().bright_green(),
        summary.invalid.to_string().bright_yellow(),
        summary.failed.to_string().bright_red(),
        summary.total()
    )
}
