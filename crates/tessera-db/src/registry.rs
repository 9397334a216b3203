//! The tenant pool registry.
//!
//! A mutable map from tenant id to pool handle while it is being populated,
//! then frozen into a read-only table for the lifetime of the process.
//! After `freeze()` the key set is immutable, so concurrent lookups need no
//! synchronization beyond shared `&` access.

use crate::error::{DbError, Result};
use std::collections::HashMap;
use tessera_core::TenantId;

/// Mapping from tenant id to connection-pool handle.
///
/// Generic over the handle type so the routing logic can be exercised with
/// stub handles in tests; production code uses
/// [`TenantPool`](crate::pool::TenantPool).
///
/// # Example
///
/// ```
/// use tessera_core::TenantId;
/// use tessera_db::PoolRegistry;
///
/// let mut registry: PoolRegistry<&str> = PoolRegistry::new();
/// registry.register(TenantId::from_i32(1), "poolA").unwrap();
/// registry.freeze();
///
/// assert_eq!(registry.lookup(TenantId::from_i32(1)), Some(&"poolA"));
/// assert!(registry.register(TenantId::from_i32(2), "poolB").is_err());
/// ```
#[derive(Debug)]
pub struct PoolRegistry<P> {
    pools: HashMap<TenantId, P>,
    frozen: bool,
}

impl<P> PoolRegistry<P> {
    /// Create an empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
            frozen: false,
        }
    }

    /// Add a tenant's pool handle.
    ///
    /// Registration order is not significant.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::RegistryFrozen`] after [`freeze`](Self::freeze)
    /// has run, and [`DbError::DuplicateTenant`] if the tenant id is
    /// already present.
    pub fn register(&mut self, tenant_id: TenantId, handle: P) -> Result<()> {
        if self.frozen {
            return Err(DbError::RegistryFrozen);
        }
        if self.pools.contains_key(&tenant_id) {
            return Err(DbError::DuplicateTenant(tenant_id));
        }
        self.pools.insert(tenant_id, handle);
        tracing::debug!(tenant_id = %tenant_id, "Registered tenant pool");
        Ok(())
    }

    /// Transition the registry to read-only. Idempotent.
    ///
    /// Once frozen, the key set stays fixed for the lifetime of the
    /// process; no tenants can be added or removed.
    pub fn freeze(&mut self) {
        if !self.frozen {
            self.frozen = true;
            tracing::info!(tenants = self.pools.len(), "Tenant registry frozen");
        }
    }

    /// Whether [`freeze`](Self::freeze) has run.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Look up a tenant's pool handle. O(1) amortized.
    #[must_use]
    pub fn lookup(&self, tenant_id: TenantId) -> Option<&P> {
        self.pools.get(&tenant_id)
    }

    /// Number of registered tenants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no tenants are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// The registered tenant ids, in no particular order.
    pub fn tenant_ids(&self) -> impl Iterator<Item = TenantId> + '_ {
        self.pools.keys().copied()
    }
}

impl<P> Default for PoolRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
