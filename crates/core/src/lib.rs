//! Core library for zap
//!
//! This crate implements the **Functional Core** of the zap URL shortener,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`zap_core`** (this crate): validation, history persistence, response
//!   interpretation and batch result formatting. No network access.
//! - **`zap`**: the command line, the HTTP client and console rendering
//!   (the Imperative Shell).
//!
//! Almost everything here is a pure function over plain data, so it can be
//! tested with fixture strings instead of a live shortening service. The one
//! exception is [`history::HistoryStore`], which owns the history file.
//!
//! # Module Organization
//!
//! - [`validate`]: syntactic URL check
//! - [`shorten`]: request URL construction and response interpretation
//! - [`history`]: history entries and the JSON history file
//! - [`batch`]: batch input parsing, per-line outcomes and the results file name
//! - [`about`]: `info`, `version` and help texts
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use zap_core::shorten::interpret_response;
//! use zap_core::validate::is_valid_url;
//!
//! assert!(is_valid_url("https://www.google.com"));
//! assert_eq!(
//!     interpret_response(200, "https://tinyurl.com/abc123\n").unwrap(),
//!     "https://tinyurl.com/abc123"
//! );
//! ```

pub mod about;
pub mod batch;
pub mod history;
pub mod shorten;
pub mod validate;
