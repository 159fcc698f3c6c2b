use thiserror::Error;

/// Failures reported by the storage capabilities.
///
/// A missing record is not an error at this level; lookups return `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Errors returned by the authentication service.
///
/// `InvalidCredentials` covers both an unknown email and a wrong password, so a caller
/// cannot tell which one it was. `Internal` carries a diagnostic for server-side logs;
/// transports must not forward it to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("app not found")]
    AppNotFound,

    #[error("internal error: {0}")]
    Internal(String),
}
