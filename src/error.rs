//! Custom error types for pubtrawl.
//!
//! This module defines all error types used throughout the application.
//! All fallible library functions return `Result<T, PubtrawlError>` instead
//! of using `unwrap()`.

use thiserror::Error;

/// Main error type for pubtrawl operations.
///
/// Uses `thiserror` for ergonomic error handling and automatic `Display` implementation.
#[derive(Debug, Error)]
pub enum PubtrawlError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// External API returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code returned by the API
        code: u16,
        /// Error message from API
        message: String,
    },

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using `PubtrawlError`
pub type Result<T> = std::result::Result<T, PubtrawlError>;
