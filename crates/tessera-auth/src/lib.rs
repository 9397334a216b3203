//! # tessera-auth
//!
//! Identity provider for tessera.
//!
//! Authentication is an external collaborator of the routing core: given
//! credentials it produces a [`CallerIdentity`] (principal, tenant
//! affiliation, roles) or fails. The routing layer consumes the identity;
//! it never inspects credentials itself.
//!
//! This crate provides the [`IdentityProvider`] trait and an
//! [`InMemoryIdentityProvider`] backed by an argon2id-hashed user table,
//! mirroring a statically configured deployment (e.g. two demo principals
//! mapped to tenants 1 and 2).
//!
//! # Example
//!
//! ```
//! use tessera_auth::{IdentityProvider, InMemoryIdentityProvider};
//! use tessera_core::TenantId;
//!
//! let provider = InMemoryIdentityProvider::builder()
//!     .user("rwinch", "pw", TenantId::from_i32(1), ["USER"])
//!     .user("jlong", "pw", TenantId::from_i32(2), ["USER"])
//!     .build()
//!     .unwrap();
//!
//! let identity = provider.authenticate("rwinch", "pw").unwrap();
//! assert_eq!(identity.tenant_id(), TenantId::from_i32(1));
//! ```

mod error;
mod password;
mod provider;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use provider::{IdentityProvider, InMemoryIdentityProvider, InMemoryIdentityProviderBuilder};

pub use tessera_core::CallerIdentity;
