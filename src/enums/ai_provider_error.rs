use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("API Error: {0}")]
    ApiError(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl AiProviderError {
    /// Maps a non-success HTTP status from a chat endpoint to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => AiProviderError::AuthenticationError(body),
            _ => AiProviderError::HttpStatus { status, body },
        }
    }
}
