//! Identity providers.
//!
//! The [`IdentityProvider`] trait is the seam between the authentication
//! collaborator and the routing core: implementations turn credentials into
//! a [`CallerIdentity`] carrying the tenant affiliation the router keys on.

use crate::error::AuthError;
use crate::password::PasswordHasher;
use std::collections::HashMap;
use tessera_core::{CallerIdentity, TenantId};

/// Turns credentials into a caller identity.
///
/// The routing layer never sees credentials; it consumes the produced
/// [`CallerIdentity`] through the caller context.
pub trait IdentityProvider: Send + Sync {
    /// Authenticate a principal by username and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnknownPrincipal`] if no such user is
    /// registered and [`AuthError::InvalidCredentials`] if the password
    /// does not match.
    fn authenticate(&self, username: &str, password: &str) -> Result<CallerIdentity, AuthError>;
}

struct StoredPrincipal {
    password_hash: String,
    tenant_id: TenantId,
    roles: Vec<String>,
}

/// Identity provider backed by a static in-memory user table.
///
/// Users are registered at build time with their plaintext password, which
/// is immediately hashed with Argon2id; only the hash is retained.
///
/// # Example
///
/// ```
/// use tessera_auth::{IdentityProvider, InMemoryIdentityProvider};
/// use tessera_core::TenantId;
///
/// let provider = InMemoryIdentityProvider::builder()
///     .user("rwinch", "pw", TenantId::from_i32(1), ["USER"])
///     .build()
///     .unwrap();
///
/// assert!(provider.authenticate("rwinch", "pw").is_ok());
/// assert!(provider.authenticate("rwinch", "nope").is_err());
/// ```
pub struct InMemoryIdentityProvider {
    users: HashMap<String, StoredPrincipal>,
    hasher: PasswordHasher,
}

impl InMemoryIdentityProvider {
    /// Start building a provider.
    #[must_use]
    pub fn builder() -> InMemoryIdentityProviderBuilder {
        InMemoryIdentityProviderBuilder::default()
    }

    /// Number of registered principals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no principals are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    fn authenticate(&self, username: &str, password: &str) -> Result<CallerIdentity, AuthError> {
        let stored = self
            .users
            .get(username)
            .ok_or_else(|| AuthError::UnknownPrincipal(username.to_string()))?;

        if !self.hasher.verify(password, &stored.password_hash)? {
            tracing::warn!(principal = username, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!(principal = username, tenant_id = %stored.tenant_id, "Principal authenticated");
        Ok(CallerIdentity::new(
            username,
            stored.tenant_id,
            stored.roles.clone(),
        ))
    }
}

/// Builder for [`InMemoryIdentityProvider`].
#[derive(Default)]
pub struct InMemoryIdentityProviderBuilder {
    entries: Vec<(String, String, TenantId, Vec<String>)>,
}

impl InMemoryIdentityProviderBuilder {
    /// Register a user with a plaintext password, tenant and roles.
    ///
    /// The password is hashed when [`build`](Self::build) runs.
    #[must_use]
    pub fn user<I, S>(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        tenant_id: TenantId,
        roles: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push((
            username.into(),
            password.into(),
            tenant_id,
            roles.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Hash all passwords and build the provider.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if any password cannot be hashed.
    pub fn build(self) -> Result<InMemoryIdentityProvider, AuthError> {
        let hasher = PasswordHasher::new();
        let mut users = HashMap::with_capacity(self.entries.len());
        for (username, password, tenant_id, roles) in self.entries {
            let password_hash = hasher.hash(&password)?;
            users.insert(
                username,
                StoredPrincipal {
                    password_hash,
                    tenant_id,
                    roles,
                },
            );
        }
        Ok(InMemoryIdentityProvider { users, hasher })
    }
}
