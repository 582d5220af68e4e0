//! Error types for the TechResQ demo
//!
//! Only one external failure path exists (the news fetch); everything else
//! is pure, total, client-local computation.

use thiserror::Error;

/// Main error type for the TechResQ demo
#[derive(Error, Debug)]
pub enum SiteError {
    /// News API errors (non-success status, malformed payload)
    #[error("News feed error: {0}")]
    NewsApiError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Demo error: {0}")]
    Generic(String),
}

/// Result type alias for demo operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Convert anyhow errors to SiteError
impl From<anyhow::Error> for SiteError {
    fn from(err: anyhow::Error) -> Self {
        SiteError::Generic(err.to_string())
    }
}
