use thiserror::Error;

/// Failure talking to the food service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, bad URL)
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("service returned status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the service itself rejected the request
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
