//! Tessera Core Library
//!
//! Shared types for tessera's per-tenant database routing.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (TenantId)
//! - [`identity`] - Caller identity (principal, tenant affiliation, roles)
//! - [`traits`] - Multi-tenant traits (TenantAware)
//!
//! # Example
//!
//! ```
//! use tessera_core::{TenantId, CallerIdentity};
//!
//! let identity = CallerIdentity::new("rwinch", TenantId::from_i32(1), ["USER"]);
//! assert_eq!(identity.tenant_id(), TenantId::from_i32(1));
//! ```

pub mod identity;
pub mod ids;
pub mod traits;

// Re-export main types for convenient access
pub use identity::CallerIdentity;
pub use ids::{ParseIdError, TenantId};
pub use traits::TenantAware;
