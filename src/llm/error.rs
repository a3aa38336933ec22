use reqwest::StatusCode;
use thiserror::Error;

/// Failures reported by the generation API
#[derive(Error, Debug, PartialEq)]
pub enum LlmError {
    #[error("Gemini rejected the API key: {0}")]
    Unauthorized(String),

    #[error("Gemini rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Gemini rejected the request: {0}")]
    BadRequest(String),

    #[error("Gemini server error: {0}")]
    ServerError(String),

    #[error("Gemini returned no text")]
    EmptyResponse,

    #[error("Gemini API error: {0}")]
    Unknown(String),
}

impl LlmError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let msg = if message.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Unauthorized(msg),
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(msg),
            status if status.is_server_error() => LlmError::ServerError(msg),
            status if status.is_client_error() => LlmError::BadRequest(msg),
            _ => LlmError::Unknown(msg),
        }
    }

    /// A bad key or a malformed request fails the same way every time
    pub fn is_retryable(&self) -> bool {
        !matches!(self, LlmError::Unauthorized(_) | LlmError::BadRequest(_))
    }
}
