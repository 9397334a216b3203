//! Per-tenant connection pools.
//!
//! A [`TenantPool`] is an opened, ready-to-use connection source for
//! exactly one tenant. The registry owns it after registration; it is
//! never reassigned to a different tenant.

use crate::config::TenantPoolConfig;
use crate::error::{DbError, Result};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::sync::Once;
use tessera_core::{TenantAware, TenantId};

static DRIVERS: Once = Once::new();

/// An opened connection pool bound to one tenant.
///
/// Wraps an [`sqlx::AnyPool`] so deployments run Postgres while tests run
/// in-memory SQLite against the same code path. Cloning is cheap; clones
/// share the underlying pool.
#[derive(Debug, Clone)]
pub struct TenantPool {
    tenant_id: TenantId,
    pool: AnyPool,
}

impl TenantPool {
    /// Open a pool for the given tenant configuration.
    ///
    /// The pool is connected eagerly so that an unreachable database
    /// surfaces during registry setup, not on the first query.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::ConnectionFailed`] if the pool cannot be opened.
    pub async fn connect(config: &TenantPoolConfig) -> Result<Self> {
        DRIVERS.call_once(sqlx::any::install_default_drivers);

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(DbError::ConnectionFailed)?;

        tracing::info!(
            tenant_id = %config.tenant_id,
            max_connections = config.max_connections,
            "Opened connection pool"
        );

        Ok(Self {
            tenant_id: config.tenant_id,
            pool,
        })
    }

    /// The underlying sqlx pool.
    #[must_use]
    pub fn inner(&self) -> &AnyPool {
        &self.pool
    }
}

impl TenantAware for TenantPool {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}
