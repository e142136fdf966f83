//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the course API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseApiError {
    /// The backend answered, but with a non-success status envelope.
    #[error("course API rejected the request: {message}")]
    Rejected { message: String },
    /// The transport reached the server but the HTTP status was not OK.
    #[error("course API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl CourseApiError {
    /// The backend-supplied message, when there is one to surface.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }
}
