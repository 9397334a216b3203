//! # tessera-context
//!
//! Task-scoped caller context for tessera.
//!
//! This crate provides [`CallerContext`], an ambient per-operation slot
//! holding the [`CallerIdentity`] of the principal currently executing.
//! The binding is established once at the start of a logical operation and
//! is implicitly visible to all code running within that operation, without
//! being threaded through every function signature.
//!
//! The slot is a tokio task-local: two operations running on concurrent
//! tasks never observe each other's identity, and the binding is dropped
//! when the scope ends (success, error, or cancellation), so stale identity
//! cannot leak into a reused worker thread.
//!
//! # Example
//!
//! ```
//! use tessera_context::CallerContext;
//! use tessera_core::{CallerIdentity, TenantId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let identity = CallerIdentity::new("rwinch", TenantId::from_i32(1), ["USER"]);
//!
//! let principal = CallerContext::scope(identity, async {
//!     CallerContext::current().map(|id| id.principal().to_string())
//! })
//! .await;
//!
//! assert_eq!(principal.as_deref(), Some("rwinch"));
//! assert!(CallerContext::current().is_none());
//! # }
//! ```

mod context;

pub use context::CallerContext;
