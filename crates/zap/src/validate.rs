use crate::prelude::{println, *};
use colored::Colorize;
use zap_core::validate::is_valid_url;

#[derive(Debug, clap::Args)]
pub struct ValidateOptions {
    /// The URL to validate (e.g., https://x.com)
    pub url: String,
}

/// Module entry point
///
/// An invalid URL is returned as [`Error::ValidateRejected`] so the caller can
/// report it and exit with a failure code.
pub fn run(options: ValidateOptions) -> Result<()> {
    if !is_valid_url(&options.url) {
        return Err(Error::ValidateRejected(options.url).into());
    }

    println!("{} {}", "URL is valid:".green(), options.url);

    Ok(())
}
