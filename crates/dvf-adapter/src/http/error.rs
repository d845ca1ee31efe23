/*
[INPUT]:  Error sources (HTTP transport, status, serialization, signing)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the DeversiFi adapter
#[derive(Error, Debug)]
pub enum DvfError {
    /// Transport-level failure (DNS, connection refused, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-200 response; the body has been drained and discarded
    #[error("failed to get data. status: {status}")]
    Status { status: StatusCode },

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Private key could not be parsed or the signing operation failed
    #[error("signing failed: {message}")]
    Signing { message: String },

    /// Freshly produced signature did not verify against the derived public key
    #[error("signature did not pass self-verification")]
    SignatureVerification,
}

impl DvfError {
    /// Create a signing error from any displayable cause
    pub(crate) fn signing(message: impl Into<String>) -> Self {
        DvfError::Signing {
            message: message.into(),
        }
    }

    /// Check if error originated in the signing layer
    pub fn is_signing_error(&self) -> bool {
        matches!(
            self,
            DvfError::Signing { .. } | DvfError::SignatureVerification
        )
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, DvfError>;
