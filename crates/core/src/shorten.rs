//! Shortening service request and response handling
//!
//! The service is a single `GET <endpoint>?url=<encoded url>` whose `200`
//! body is the short URL in plain text. Anything else is a failure; there
//! are no retries.

/// TinyURL plain-text creation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://tinyurl.com/api-create.php";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Why a single shortening attempt failed
///
/// The `Display` text is what the batch results file records inside the
/// parentheses of a `Failed to shorten` line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenFailure {
    /// The service answered with something other than `200`
    #[error("Status code: {0}")]
    Status(u16),

    /// Connection error, timeout or unreadable body
    #[error("Error: {0}")]
    Transport(String),

    /// The service answered `200` with a blank body
    #[error("Error: empty response body")]
    EmptyBody,
}

/// Build the request URL for shortening `url`
///
/// `url` is percent-encoded and sent as the `url` query parameter. An
/// endpoint that already carries a query string gets the parameter appended.
pub fn build_request_url(endpoint: &str, url: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}url={}", urlencoding::encode(url))
}

/// Interpret the service reply
///
/// Only status `200` is a success; the trimmed body is the short URL.
pub fn interpret_response(status: u16, body: &str) -> Result<String, ShortenFailure> {
    if status != 200 {
        return Err(ShortenFailure::Status(status));
    }

    let short_url = body.trim();
    if short_url.is_empty() {
        return Err(ShortenFailure::EmptyBody);
    }

    Ok(short_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // build_request_url tests
    // ============================================================================

    #[test]
    fn test_build_request_url_default_endpoint() {
        assert_eq!(
            build_request_url(DEFAULT_ENDPOINT, "https://x.com"),
            "http://tinyurl.com/api-create.php?url=https%3A%2F%2Fx.com"
        );
    }

    #[test]
    fn test_build_request_url_encodes_query_characters() {
        let request = build_request_url(
            DEFAULT_ENDPOINT,
            "https://www.google.com/search?q=rust lang&hl=en",
        );

        assert_eq!(
            request,
            "http://tinyurl.com/api-create.php?url=https%3A%2F%2Fwww.google.com%2Fsearch%3Fq%3Drust%20lang%26hl%3Den"
        );
    }

    #[test]
    fn test_build_request_url_endpoint_with_query() {
        let request = build_request_url("http://localhost:8080/create?format=text", "http://a.io");
        assert_eq!(
            request,
            "http://localhost:8080/create?format=text&url=http%3A%2F%2Fa.io"
        );
    }

    // ============================================================================
    // interpret_response tests
    // ============================================================================

    #[test]
    fn test_interpret_response_success() {
        assert_eq!(
            interpret_response(200, "https://tinyurl.com/2p8abcde").unwrap(),
            "https://tinyurl.com/2p8abcde"
        );
    }

    #[test]
    fn test_interpret_response_trims_body() {
        assert_eq!(
            interpret_response(200, "  https://tinyurl.com/2p8abcde\n").unwrap(),
            "https://tinyurl.com/2p8abcde"
        );
    }

    #[test]
    fn test_interpret_response_non_200() {
        assert_eq!(
            interpret_response(400, "Error"),
            Err(ShortenFailure::Status(400))
        );
        assert_eq!(
            interpret_response(201, "https://tinyurl.com/x"),
            Err(ShortenFailure::Status(201))
        );
        assert_eq!(interpret_response(503, ""), Err(ShortenFailure::Status(503)));
    }

    #[test]
    fn test_interpret_response_empty_body() {
        assert_eq!(interpret_response(200, " \n"), Err(ShortenFailure::EmptyBody));
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(ShortenFailure::Status(404).to_string(), "Status code: 404");
        assert_eq!(
            ShortenFailure::Transport("operation timed out".to_string()).to_string(),
            "Error: operation timed out"
        );
    }
}
