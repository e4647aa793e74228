use crate::config::Config;
use crate::prelude::*;
use zap_core::shorten::{build_request_url, interpret_response, ShortenFailure};

/// Something that turns a long URL into a short one
pub trait Shortener {
    async fn shorten(&self, url: &str) -> Result<String, ShortenFailure>;
}

/// HTTP client for the shortening endpoint
///
/// Makes exactly one request per URL, bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct ShortenClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ShortenClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("zap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            endpoint: config.api_endpoint.clone(),
        })
    }
}

impl Shortener for ShortenClient {
    async fn shorten(&self, url: &str) -> Result<String, ShortenFailure> {
        let request_url = build_request_url(&self.endpoint, url);
        log::debug!("GET {request_url}");

        let response = self
            .http
            .get(&request_url)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status().as_u16();
        log::debug!("Shortening API answered {status} for {url}");

        if status != 200 {
            return interpret_response(status, "");
        }

        let body = response.text().await.map_err(transport_failure)?;

        interpret_response(status, &body)
    }
}

fn transport_failure(err: reqwest::Error) -> ShortenFailure {
    ShortenFailure::Transport(error_chain(&err))
}

/// Join an error and all of its sources into one line
///
/// reqwest only shows the top-level "error sending request" in `Display`;
/// the cause (refused, timed out, DNS) lives further down the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }

    message
}
