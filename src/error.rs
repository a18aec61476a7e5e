//! Error model shared by the transport layer and the worklog operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TempoError>;

/// Failures are two-tier: transport-level problems (the request never
/// produced an HTTP response) and non-200 statuses (it did, and the add-on
/// rejected the call). The raw [`StatusCode`] is always preserved in the
/// latter so callers can branch on 403/404 without string matching.
#[derive(Debug, Error)]
pub enum TempoError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        message: String,
    },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("worklog is missing an id")]
    MissingId,
    #[error("unexpected error: {0}")]
    Other(String),
}

impl TempoError {
    /// Builds the non-200 variant from a status and the response body,
    /// falling back to the status's canonical reason ("Forbidden",
    /// "Not Found") when the server sent nothing useful.
    pub fn http(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            body
        };
        TempoError::Http { status, message }
    }

    /// Status code of an HTTP-level failure, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TempoError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TempoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TempoError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            TempoError::Http {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TempoError::Network(err.to_string())
        } else {
            TempoError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TempoError {
    fn from(err: serde_json::Error) -> Self {
        TempoError::Serialization(err.to_string())
    }
}
