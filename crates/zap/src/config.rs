use crate::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use zap_core::history::DEFAULT_HISTORY_FILE;
use zap_core::shorten::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Runtime configuration from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub history_file: PathBuf,
    pub api_endpoint: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Uses ZAP_HISTORY_FILE, ZAP_API_ENDPOINT and ZAP_TIMEOUT_SECS, falling
    /// back to the defaults for any that are unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("ZAP_HISTORY_FILE").filter(|v| !v.trim().is_empty()) {
            config.history_file = PathBuf::from(path);
        }

        if let Some(endpoint) = lookup("ZAP_API_ENDPOINT").filter(|v| !v.trim().is_empty()) {
            config.api_endpoint = endpoint;
        }

        if let Some(timeout) = lookup("ZAP_TIMEOUT_SECS") {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    eyre!(
                        "ZAP_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                        timeout
                    )
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        log::debug!("Loaded configuration: {config:?}");

        Ok(config)
    }
}
