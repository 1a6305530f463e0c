//! Error types for roster.
//!
//! Errors are split by concern with `thiserror` and compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned to `main`
//!   - [`LoadError`] - Initial fetch of the record list failed (network, file, JSON)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file could not be set up
//!   - [`TuiError`](crate::view::TuiError) - Terminal failures
//! - [`ParseError`] - A single record in an otherwise valid payload was rejected
//!
//! # Recovery Strategy
//!
//! A `LoadError` is **non-fatal** inside the TUI: it is logged and the table
//! stays empty. There is no retry. A `ParseError` skips the offending record
//! and loading carries on with the rest.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Loading the record list failed.
    ///
    /// Only surfaces here when a caller chooses to treat the load as fatal;
    /// the TUI logs it and continues with an empty table.
    #[error("Failed to load records: {0}")]
    Load(#[from] LoadError),

    /// Terminal or TUI rendering error.
    #[error("{0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failure to fetch or decode the initial record list.
///
/// This is the only externally visible failure kind of the record view.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use roster::model::error::LoadError;
///
/// let err = LoadError::FileNotFound { path: PathBuf::from("/tmp/members.json") };
/// assert!(err.to_string().contains("/tmp/members.json"));
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// The local source file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading the local source file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request could not be completed (DNS, TLS, timeout, body read).
    #[error("Request to {url} failed: {reason}")]
    Http {
        /// Requested URL.
        url: String,
        /// Transport error description.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },

    /// The payload is not valid JSON.
    #[error("Invalid JSON payload: {reason}")]
    InvalidJson {
        /// Parser message from `serde_json`.
        reason: String,
    },

    /// The payload is valid JSON but not an array of records.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// The loader thread went away without sending a result.
    #[error("Loader stopped before producing a result")]
    Disconnected,
}

/// A single record rejected while parsing the payload.
///
/// Non-fatal: the record is skipped and logged, remaining records load.
///
/// # Examples
///
/// ```
/// use roster::model::error::ParseError;
///
/// let err = ParseError::MissingId { index: 4 };
/// assert!(err.to_string().contains("index 4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Array element is not a JSON object.
    #[error("Element at index {index} is not an object")]
    NotAnObject {
        /// Zero-based position in the payload array.
        index: usize,
    },

    /// Object has no `id` field.
    #[error("Record at index {index} has no 'id' field")]
    MissingId {
        /// Zero-based position in the payload array.
        index: usize,
    },

    /// `id` is present but empty or not a string/number.
    #[error("Record at index {index} has an invalid id: {reason}")]
    InvalidId {
        /// Zero-based position in the payload array.
        index: usize,
        /// Why the id was rejected.
        reason: String,
    },

    /// `id` repeats an earlier record's id; the later record is dropped.
    #[error("Record at index {index} repeats id '{id}'")]
    DuplicateId {
        /// Zero-based position in the payload array.
        index: usize,
        /// The repeated id.
        id: String,
    },
}
