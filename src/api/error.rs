use thiserror::Error;

/// Errors surfaced by calls to the management service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The login endpoint answered but rejected the credentials.
    #[error("login rejected for user '{0}'")]
    Rejected(String),

    /// The request never completed (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body could not be interpreted.
    #[error("unexpected payload from {endpoint}: {detail}")]
    UnexpectedPayload { endpoint: String, detail: String },
}

impl ApiError {
    /// True when the service explicitly told us we are not authenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}
