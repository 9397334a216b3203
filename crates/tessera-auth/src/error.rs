//! Error types for authentication operations.
//!
//! Provides explicit error variants for all authentication failures.

use thiserror::Error;

/// Authentication error types.
///
/// Each variant maps to a specific failure mode. Note that
/// `UnknownPrincipal` and `InvalidCredentials` are deliberately distinct
/// here; callers presenting errors to end users may want to collapse them
/// to avoid revealing which usernames exist.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No principal with the given username is registered.
    #[error("Unknown principal: {0}")]
    UnknownPrincipal(String),

    /// The password did not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// A stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

impl AuthError {
    /// Check if this error indicates an unknown principal.
    #[must_use]
    pub fn is_unknown_principal(&self) -> bool {
        matches!(self, AuthError::UnknownPrincipal(_))
    }

    /// Check if this error indicates rejected credentials.
    #[must_use]
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials)
    }

    /// Check if this error is related to password hashing internals.
    #[must_use]
    pub fn is_hashing_error(&self) -> bool {
        matches!(
            self,
            AuthError::HashingFailed(_) | AuthError::InvalidHashFormat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_principal_display() {
        let err = AuthError::UnknownPrincipal("ghost".to_string());
        assert_eq!(err.to_string(), "Unknown principal: ghost");
        assert!(err.is_unknown_principal());
    }

    #[test]
    fn test_invalid_credentials_display() {
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_invalid_credentials());
        assert!(!err.is_hashing_error());
    }

    #[test]
    fn test_hashing_error_predicate() {
        assert!(AuthError::HashingFailed("boom".to_string()).is_hashing_error());
        assert!(AuthError::InvalidHashFormat.is_hashing_error());
    }
}
