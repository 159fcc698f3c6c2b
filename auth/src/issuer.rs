use std::time::Duration;

use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;

/// Who a session token is issued to, and for which application.
#[derive(Debug, Clone, Copy)]
pub struct TokenSubject<'a> {
    pub user_id: i64,
    pub email: &'a str,
    pub app_id: i32,
}

/// Issues and verifies per-application session tokens.
///
/// There is no process-wide signing key: every token is signed with the secret of the
/// application it is scoped to, and only that secret verifies it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Build and sign a token for `subject` that expires `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - User and application the token binds together
    /// * `app_secret` - Signing secret of `subject.app_id`
    /// * `ttl` - Token lifetime
    ///
    /// # Errors
    /// * `InvalidLifetime` - `ttl` does not fit a timestamp
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn issue(
        &self,
        subject: TokenSubject<'_>,
        app_secret: &[u8],
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let ttl =
            chrono::Duration::from_std(ttl).map_err(|e| JwtError::InvalidLifetime(e.to_string()))?;
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::InvalidLifetime("expiry overflows".to_string()))?;

        let claims = SessionClaims::new(subject.user_id, subject.email, subject.app_id, expires_at);

        JwtHandler::new(app_secret).encode(&claims)
    }

    /// Verify a token against an application secret and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Token was not signed with `app_secret`
    /// * `DecodingFailed` - Token is malformed
    pub fn verify(&self, token: &str, app_secret: &[u8]) -> Result<SessionClaims, JwtError> {
        JwtHandler::new(app_secret).decode(token)
    }
}
