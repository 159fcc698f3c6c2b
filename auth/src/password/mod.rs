//! Password hashing for stored user credentials.

pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
