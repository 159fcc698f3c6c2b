use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Produces self-describing PHC strings (Argon2id, parameters and a fresh random salt are
/// all encoded in the output), so verification needs nothing but the stored hash.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a hasher with the Argon2id default cost parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes over memory
    /// * `parallelism` - Degree of parallelism
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside the ranges Argon2 accepts
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self { params })
    }

    /// Hash a plaintext password.
    ///
    /// Every call draws a new salt from the OS RNG, so hashing the same password twice
    /// never yields the same string.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The cost parameters are read from the stored hash, not from this hasher, so hashes
    /// produced under an older cost setting keep verifying.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(1024, 1, 1).expect("valid params")
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = cheap_hasher();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = cheap_hasher();

        let first = hasher.hash("Secret123!").unwrap();
        let second = hasher.hash("Secret123!").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("Secret123!", &first).unwrap());
        assert!(hasher.verify("Secret123!", &second).unwrap());
        assert!(!hasher.verify("Secret123?", &first).unwrap());
        assert!(!hasher.verify("Secret123?", &second).unwrap());
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let hasher = cheap_hasher();

        let hash = hasher.hash("").unwrap();
        assert!(hasher.verify("", &hash).unwrap());
        assert!(!hasher.verify(" ", &hash).unwrap());
    }

    #[test]
    fn test_verify_uses_cost_from_stored_hash() {
        let hash = cheap_hasher().hash("password").unwrap();

        // Default-cost hasher still verifies a hash created with a cheaper cost.
        assert!(PasswordHasher::new().verify("password", &hash).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = cheap_hasher();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let result = PasswordHasher::with_cost(1, 0, 0);
        assert!(matches!(result, Err(PasswordError::InvalidParams(_))));
    }
}
