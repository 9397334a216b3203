//! Password hashing with Argon2id.

use crate::error::AuthError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Argon2id password hasher for the in-memory identity provider.
///
/// Defaults to the OWASP-recommended cost parameters (19 MiB, t=2, p=1).
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a hasher with the default cost parameters.
    #[must_use]
    pub fn new() -> Self {
        // Constants; Params::new cannot reject them.
        let params =
            Params::new(19456, 2, 1, None).expect("default Argon2 parameters are valid");
        Self { params }
    }

    /// Create a hasher with custom cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password, returning a PHC-formatted hash string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a PHC-formatted hash.
    ///
    /// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if `hash` is not a valid PHC
    /// string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;
        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
