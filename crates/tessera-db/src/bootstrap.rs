//! Per-pool schema and seed bootstrap.
//!
//! Each tenant's pool is expected to have its schema applied before first
//! use. [`Bootstrap`] holds one schema script shared by all tenants plus an
//! optional per-tenant seed script, and is applied once per pool during
//! registry setup (the wiring in
//! [`TenantRouter::from_configs`](crate::router::TenantRouter::from_configs)).

use crate::error::{DbError, Result};
use crate::pool::TenantPool;
use sqlx::AnyPool;
use std::collections::HashMap;
use tessera_core::{TenantAware, TenantId};

/// Schema and seed scripts applied to each pool at setup time.
///
/// # Example
///
/// ```
/// use tessera_core::TenantId;
/// use tessera_db::Bootstrap;
///
/// let bootstrap = Bootstrap::new()
///     .with_schema("CREATE TABLE IF NOT EXISTS customer (id INTEGER PRIMARY KEY, name TEXT)")
///     .with_seed(TenantId::from_i32(1), "INSERT INTO customer (name) VALUES ('Ada')");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    schema: Option<String>,
    seeds: HashMap<TenantId, String>,
}

impl Bootstrap {
    /// An empty bootstrap: pools are used as-is.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema script applied to every tenant's pool.
    #[must_use]
    pub fn with_schema(mut self, sql: impl Into<String>) -> Self {
        self.schema = Some(sql.into());
        self
    }

    /// Set the seed script applied to one tenant's pool only.
    #[must_use]
    pub fn with_seed(mut self, tenant_id: TenantId, sql: impl Into<String>) -> Self {
        self.seeds.insert(tenant_id, sql.into());
        self
    }

    /// Apply the schema and this tenant's seed (if any) to a pool.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::BootstrapFailed`] if any statement fails.
    pub async fn apply(&self, pool: &TenantPool) -> Result<()> {
        if let Some(schema) = &self.schema {
            run_script(pool.inner(), schema).await?;
        }
        if let Some(seed) = self.seeds.get(&pool.tenant_id()) {
            run_script(pool.inner(), seed).await?;
            tracing::info!(tenant_id = %pool.tenant_id(), "Applied seed data");
        }
        Ok(())
    }
}

/// Execute a multi-statement SQL script, one statement at a time.
///
/// Statements are separated by `;`. This intentionally does not handle
/// semicolons inside string literals; bootstrap scripts are static,
/// deployment-controlled files.
pub async fn run_script(pool: &AnyPool, sql: &str) -> Result<()> {
    for statement in sql.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(DbError::BootstrapFailed)?;
    }
    Ok(())
}
