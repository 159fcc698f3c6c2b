use thiserror::Error;

/// Failures while signing or checking a session token.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid: {0}")]
    InvalidToken(String),

    #[error("Token lifetime out of range: {0}")]
    InvalidLifetime(String),
}
