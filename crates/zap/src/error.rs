use zap_core::shorten::ShortenFailure;

/// Failures reported to the user as a plain message with exit code 1
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("URL is invalid: {0}")]
    ValidateRejected(String),

    #[error("Invalid URL. Please provide a valid URL (e.g., https://www.google.com).")]
    InvalidUrl,

    #[error("Failed to shorten URL (Status code: {0}).")]
    ShortenStatus(u16),

    #[error("Could not connect to the shortening API. Details: {0}")]
    Network(String),

    #[error("The shortening API returned an empty response.")]
    EmptyResponse,

    #[error("File '{0}' not found.")]
    BatchFileNotFound(String),

    #[error("Input file is empty.")]
    BatchFileEmpty,
}

impl Error {
    /// Whether this is the answer of `validate` rather than a failure report
    ///
    /// Verdicts go to stdout; everything else is printed to stderr.
    pub fn is_verdict(&self) -> bool {
        matches!(self, Error::ValidateRejected(_))
    }
}

impl From<ShortenFailure> for Error {
    fn from(failure: ShortenFailure) -> Self {
        match failure {
            ShortenFailure::Status(code) => Error::ShortenStatus(code),
            ShortenFailure::Transport(details) => Error::Network(details),
            ShortenFailure::EmptyBody => Error::EmptyResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        assert_eq!(
            format!("Error: {}", Error::InvalidUrl),
            "Error: Invalid URL. Please provide a valid URL (e.g., https://www.google.com)."
        );
    }

    #[test]
    fn test_validate_rejected_message() {
        assert_eq!(
            Error::ValidateRejected("not-a-url".to_string()).to_string(),
            "URL is invalid: not-a-url"
        );
    }

    #[test]
    fn test_only_validate_rejection_is_a_verdict() {
        assert!(Error::ValidateRejected("x".to_string()).is_verdict());
        assert!(!Error::InvalidUrl.is_verdict());
        assert!(!Error::BatchFileEmpty.is_verdict());
        assert!(!Error::ShortenStatus(500).is_verdict());
    }

    #[test]
    fn test_from_shorten_failure() {
        assert_eq!(
            Error::from(ShortenFailure::Status(404)).to_string(),
            "Failed to shorten URL (Status code: 404)."
        );
        assert_eq!(
            Error::from(ShortenFailure::Transport("connection refused".to_string())).to_string(),
            "Could not connect to the shortening API. Details: connection refused"
        );
    }
}
