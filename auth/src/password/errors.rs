use thiserror::Error;

/// Failures of the credential hasher.
///
/// A wrong password is not an error; `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is unusable: {0}")]
    VerificationFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),
}
