//! Error types for the ssml-tts crate.
//!
//! A single `thiserror` hierarchy covers everything the tool can fail on:
//! credential discovery, the synthesis API call, and file I/O. The SSML
//! encoder itself is total and contributes no error variant.

use thiserror::Error;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication errors (ADC not configured, token refresh failures)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// API errors with endpoint and HTTP status context
    #[error("API error for {endpoint} (HTTP {status_code}): {message}")]
    Api {
        /// The API endpoint that was called
        endpoint: String,
        /// HTTP status code returned by the API (0 if the request never completed)
        status_code: u16,
        /// Error message from the API or describing the failure
        message: String,
    },

    /// File system I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new API error with endpoint, status code, and message.
    pub fn api(endpoint: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            endpoint: endpoint.into(),
            status_code,
            message: message.into(),
        }
    }
}

/// Authentication errors raised while obtaining Google Cloud credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// ADC is not configured
    #[error("ADC not configured. Run 'gcloud auth application-default login' or set GOOGLE_APPLICATION_CREDENTIALS")]
    NotConfigured,

    /// Token refresh failed
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),
}

/// Result type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
