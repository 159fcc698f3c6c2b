use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// Binds a user to the application the token was issued for. `exp` is an absolute Unix
/// timestamp, so a verifier never needs to know when the token was issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// User identifier
    pub uid: i64,

    /// User email at issuance time
    pub email: String,

    /// Application the token is scoped to
    pub app_id: i32,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Create claims expiring at the given instant.
    pub fn new(uid: i64, email: impl Into<String>, app_id: i32, expires_at: DateTime<Utc>) -> Self {
        Self {
            uid,
            email: email.into(),
            app_id,
            exp: expires_at.timestamp(),
        }
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
