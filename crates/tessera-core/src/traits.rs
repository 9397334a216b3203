//! Multi-Tenant Traits
//!
//! This module provides traits for tenant-scoped entities.
//!
//! # Example
//!
//! ```
//! use tessera_core::{TenantId, TenantAware};
//!
//! struct Document {
//!     tenant_id: TenantId,
//!     title: String,
//! }
//!
//! impl TenantAware for Document {
//!     fn tenant_id(&self) -> TenantId {
//!         self.tenant_id
//!     }
//! }
//!
//! fn belongs_to<T: TenantAware>(entity: &T, tenant: TenantId) -> bool {
//!     entity.tenant_id() == tenant
//! }
//! ```

use crate::ids::TenantId;

/// Trait for entities that belong to a specific tenant.
///
/// Implementing this trait marks an entity as tenant-scoped, enabling
/// generic verification that tenant isolation is respected.
///
/// This trait is object-safe and can be used as `&dyn TenantAware`.
pub trait TenantAware {
    /// Returns the tenant ID associated with this entity.
    ///
    /// Returns an owned `TenantId` (which is `Copy`) so callers can use
    /// the value without lifetime concerns.
    fn tenant_id(&self) -> TenantId;
}
