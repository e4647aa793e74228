//! Syntactic URL validation
//!
//! A URL is accepted when it has an `http` or `https` scheme, a host that is
//! a dotted domain name, `localhost` or a dotted-quad IP, an optional port and
//! an optional path or query. No network lookups are made.

use regex::Regex;
use std::sync::OnceLock;

const URL_PATTERN: &str = concat!(
    r"(?i)^(?:http|https)://",
    // domain
    r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?",
    // localhost
    r"|localhost",
    // IPv4
    r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
    // optional port
    r"(?::\d+)?",
    // optional path or query
    r"(?:/?|[/?]\S+)$",
);

fn url_regex() -> &'static Regex {
    static RE_URL: OnceLock<Regex> = OnceLock::new();
    RE_URL.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// Check whether `url` looks like an http(s) URL
pub fn is_valid_url(url: &str) -> bool {
    url_regex().is_match(url)
}
