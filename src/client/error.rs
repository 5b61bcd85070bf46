//! Error types for the remote collection client.

use std::fmt;

use thiserror::Error;

/// Why a single request did not produce a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The request never got a response (DNS, refused connection, TLS...).
    Connection(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The response body was not the expected JSON shape.
    Body(String),
    /// The id cannot be sent as a single path segment.
    InvalidId(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Connection(message) => write!(f, "connection failed: {}", message),
            Failure::Status(status) => write!(f, "server responded with status {}", status),
            Failure::Body(message) => write!(f, "unreadable response body: {}", message),
            Failure::InvalidId(id) => write!(f, "id '{}' cannot be used as a path segment", id),
        }
    }
}

/// Errors surfaced by [`CollectionClient`](super::CollectionClient) operations.
///
/// 4xx and 5xx responses are not distinguished: any non-2xx status is a
/// failure of the operation that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// A list or single-item read failed.
    #[error("Fetch failed for '{url}': {failure}")]
    FetchFailed { url: String, failure: Failure },

    /// Submitting a draft failed.
    #[error("Create failed for '{url}': {failure}")]
    CreateFailed { url: String, failure: Failure },

    /// The configured base location cannot address a collection.
    #[error("Invalid collection location '{location}': {message}")]
    InvalidLocation { location: String, message: String },
}

impl ClientError {
    /// Stable tag for logs and notices.
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::FetchFailed { .. } => "fetch_failed",
            ClientError::CreateFailed { .. } => "create_failed",
            ClientError::InvalidLocation { .. } => "invalid_location",
        }
    }

    /// The underlying request failure, when there was a request.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ClientError::FetchFailed { failure, .. } | ClientError::CreateFailed { failure, .. } => {
                Some(failure)
            }
            ClientError::InvalidLocation { .. } => None,
        }
    }
}
