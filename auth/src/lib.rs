//! Authentication primitives for the SSO service
//!
//! - Password hashing (Argon2id)
//! - JWT encoding and validation
//! - Per-application session token issuing
//!
//! Nothing here knows about storage or transports; the service crate wires these into its
//! own domain types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use std::time::Duration;
//!
//! use auth::{TokenIssuer, TokenSubject};
//!
//! let issuer = TokenIssuer::new();
//! let subject = TokenSubject { user_id: 1, email: "user@example.com", app_id: 1 };
//! let token = issuer.issue(subject, b"app-secret", Duration::from_secs(3600)).unwrap();
//!
//! let claims = issuer.verify(&token, b"app-secret").unwrap();
//! assert_eq!(claims.uid, 1);
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

pub use issuer::TokenIssuer;
pub use issuer::TokenSubject;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
