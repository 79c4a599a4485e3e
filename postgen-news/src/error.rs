//! Error types for the news module

use thiserror::Error;

/// Errors that can occur while looking up news
///
/// These are recoverable: [`crate::NewsLookup`] logs them and degrades to a
/// sentinel digest.
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
