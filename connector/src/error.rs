//! Error taxonomy for connector calls.
//!
//! Every variant is local to the call that produced it; nothing here poisons later calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The search state cannot be turned into a request (page number or page size out of range).
    #[error("invalid search state: {message}")]
    InvalidState { message: String },

    /// Transport failure: connection refused, timeout or a non-2xx status.
    #[error("network error: {message}")]
    Network { message: String, status: Option<u16> },

    /// The backend answered, but not with the expected shape.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl ConnectorError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        ConnectorError::InvalidState { message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ConnectorError::Network { message: message.into(), status: None }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ConnectorError::MalformedResponse { message: message.into() }
    }

    /// HTTP status of a rejected request, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConnectorError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
