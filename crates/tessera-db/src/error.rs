//! Error types for the tessera-db crate.
//!
//! Provides a unified error type covering registry construction, routing,
//! and query execution. None of these are retried or swallowed internally;
//! masking them risks executing an operation against the wrong tenant's
//! data, which is the one failure this crate exists to prevent.

use tessera_core::TenantId;
use thiserror::Error;

/// Database routing and access errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to open a connection pool for a tenant.
    ///
    /// Registry setup is expected to always succeed (configuration is
    /// static); embedders should treat this as fatal to startup rather
    /// than a per-operation recoverable error.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// Schema or seed bootstrap failed against a tenant's pool.
    #[error("Bootstrap failed: {0}")]
    BootstrapFailed(#[source] sqlx::Error),

    /// Attempted to register a tenant id that is already present.
    #[error("Tenant {0} is already registered")]
    DuplicateTenant(TenantId),

    /// Attempted to register a tenant after the registry was frozen.
    #[error("Registry is frozen; no further tenants may be registered")]
    RegistryFrozen,

    /// Pool resolution was attempted with no caller identity bound.
    ///
    /// This is an explicit policy: resolution never falls back to an
    /// arbitrary tenant's pool when the caller is unknown.
    #[error("No caller identity bound to the current operation")]
    NoCallerIdentity,

    /// The caller's identity named a tenant absent from the registry.
    #[error("Unknown tenant: {0}")]
    UnknownTenant(TenantId),

    /// A query addressed a specific record that does not exist in the
    /// resolved tenant's store.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// The type of resource that was not found (e.g., "Customer")
        resource: String,
        /// Identifier of the resource
        id: String,
    },

    /// An insert did not yield a generated primary key.
    #[error("Insert returned no generated key")]
    NoGeneratedKey,
}

/// Type alias for Results using [`DbError`].
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Check if this error indicates a connection problem.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_))
    }

    /// Check if this error indicates a missing caller identity.
    #[must_use]
    pub fn is_no_caller_identity(&self) -> bool {
        matches!(self, DbError::NoCallerIdentity)
    }

    /// Check if this error indicates an unregistered tenant.
    #[must_use]
    pub fn is_unknown_tenant(&self) -> bool {
        matches!(self, DbError::UnknownTenant(_))
    }

    /// Check if this error indicates registry misconfiguration
    /// (duplicate registration or a post-freeze registration attempt).
    #[must_use]
    pub fn is_registry_misuse(&self) -> bool {
        matches!(self, DbError::DuplicateTenant(_) | DbError::RegistryFrozen)
    }

    /// Check if this error indicates a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}
