//! # tessera-db
//!
//! Per-tenant database routing: one logical data-access surface backed by
//! N physically separate connection pools, one per tenant, where the pool
//! used for any operation is chosen from the identity of the caller that is
//! currently executing.
//!
//! ## Components
//!
//! - [`PoolRegistry`] - tenant id to pool-handle map, built once at startup
//!   and frozen before concurrent use
//! - [`TenantRouter`] - resolves the current caller's identity to a pool,
//!   performing one-time deferred registry setup on first use
//! - [`CustomerStore`] - the data-access facade; every operation resolves
//!   the pool at the moment of the call
//! - [`Bootstrap`] - per-pool schema/seed application at setup time
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tessera_context::CallerContext;
//! use tessera_core::TenantId;
//! use tessera_db::{Bootstrap, CustomerStore, TenantPoolConfig, TenantRouter};
//!
//! let configs = vec![
//!     TenantPoolConfig::new(TenantId::from_i32(1), "postgres://user:pw@localhost:5431/user"),
//!     TenantPoolConfig::new(TenantId::from_i32(2), "postgres://user:pw@localhost:5432/user"),
//! ];
//! let router = Arc::new(TenantRouter::from_configs(configs, Bootstrap::new()));
//! let store = CustomerStore::new(router);
//!
//! // Inside a request scope with an authenticated identity bound:
//! let created = CallerContext::scope(identity, store.create("Ada")).await?;
//! ```
//!
//! Cross-tenant data leakage is the single worst failure mode this crate
//! exists to prevent: a lookup for a tenant that is not registered fails
//! loudly, never falls back to another tenant's pool.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod pool;
pub mod registry;
pub mod router;
pub mod store;

pub use bootstrap::Bootstrap;
pub use config::TenantPoolConfig;
pub use error::{DbError, Result};
pub use pool::TenantPool;
pub use registry::PoolRegistry;
pub use router::TenantRouter;
pub use store::{Customer, CustomerStore};
