//! Error types for robingood-core.
//!
//! None of these are shown to the user. The search view logs them and keeps
//! whatever results it already had.

use thiserror::Error;

/// Errors that can occur while querying the scoring service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Endpoint URL could not be parsed or uses an unsupported scheme
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Network unreachable, timeout, or the body could not be read
    #[error("Request failed: {0}")]
    Transport(String),
    /// Service answered with a non-success status
    #[error("Scoring service returned status {0}")]
    Status(u16),
    /// Success response whose body is not a JSON array of records
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl QueryError {
    /// Short machine-friendly name of the failure kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::InvalidEndpoint(_) => "invalid_endpoint",
            QueryError::Transport(_) => "transport",
            QueryError::Status(_) => "status",
            QueryError::MalformedBody(_) => "malformed_body",
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::MalformedBody(err.to_string())
    }
}
