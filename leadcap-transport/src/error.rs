//! Error types for the transport layer.
//!
//! These cover construction and credential-store faults only. In-flight
//! request failures are never surfaced as `Err`: they are classified into
//! an `ApiResult::Failure` by the client.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur setting up or persisting transport state.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The credential store could not be read or written.
    #[error("token store I/O error: {0}")]
    TokenStore(#[from] std::io::Error),
}
