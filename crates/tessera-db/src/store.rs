//! The data-access facade.
//!
//! [`CustomerStore`] issues SQL against whichever pool the router resolves
//! for the identity active at the moment of each call. It depends on the
//! router, never on any specific pool.

use crate::error::{DbError, Result};
use crate::pool::TenantPool;
use crate::router::TenantRouter;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row};
use std::sync::Arc;

/// A customer record in one tenant's store.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Customer {
    /// Generated primary key.
    pub id: i64,
    /// Customer name.
    pub name: String,
}

/// Tenant-routed access to the `customer` table.
///
/// Every operation calls
/// [`TenantRouter::resolve_source`](crate::router::TenantRouter::resolve_source)
/// immediately before issuing SQL, so the pool used is the one matching the
/// caller bound at call time, not at store construction time.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    router: Arc<TenantRouter<TenantPool>>,
}

impl CustomerStore {
    /// Create a store over a shared router.
    #[must_use]
    pub fn new(router: Arc<TenantRouter<TenantPool>>) -> Self {
        Self { router }
    }

    /// Insert a customer and return it with its generated primary key.
    ///
    /// The key is retrieved atomically as part of the same statement
    /// (`RETURNING id`).
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NoGeneratedKey`] if the backing store yields no
    /// key row, plus any routing error from resolution.
    pub async fn create(&self, name: &str) -> Result<Customer> {
        let pool = self.router.resolve_source().await?;

        let row = sqlx::query("INSERT INTO customer (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_optional(pool.inner())
            .await
            .map_err(DbError::QueryFailed)?;

        let row = row.ok_or(DbError::NoGeneratedKey)?;
        let id: i64 = row.try_get("id").map_err(DbError::QueryFailed)?;

        tracing::debug!(id, name, "Created customer");
        Ok(Customer {
            id,
            name: name.to_string(),
        })
    }

    /// Fetch all customers in the resolved tenant's store.
    pub async fn find_all(&self) -> Result<Vec<Customer>> {
        let pool = self.router.resolve_source().await?;

        sqlx::query_as::<_, Customer>("SELECT id, name FROM customer ORDER BY id")
            .fetch_all(pool.inner())
            .await
            .map_err(DbError::QueryFailed)
    }

    /// Fetch one customer by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if no row matches; never an
    /// empty/default record.
    pub async fn find_by_id(&self, id: i64) -> Result<Customer> {
        let pool = self.router.resolve_source().await?;

        sqlx::query_as::<_, Customer>("SELECT id, name FROM customer WHERE id = $1")
            .bind(id)
            .fetch_optional(pool.inner())
            .await
            .map_err(DbError::QueryFailed)?
            .ok_or_else(|| DbError::NotFound {
                resource: "Customer".to_string(),
                id: id.to_string(),
            })
    }
}
