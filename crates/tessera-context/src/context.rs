//! The caller-context slot.
//!
//! One task-local slot per logical operation. Scoping rather than explicit
//! set/clear guarantees the binding cannot outlive the operation.

use std::future::Future;
use tessera_core::CallerIdentity;

tokio::task_local! {
    static CURRENT_CALLER: CallerIdentity;
}

/// Ambient, per-operation caller context.
///
/// `CallerContext` binds a [`CallerIdentity`] to the current task for the
/// duration of one scope. Absence of a binding is a valid state (system or
/// unauthenticated context) and is reported as `None` by [`current`].
///
/// The binding is scoped, not global: it is installed by [`scope`] (or
/// [`sync_scope`]) and removed when the wrapped future or closure finishes,
/// however it finishes. Concurrent tasks each carry their own binding.
///
/// [`current`]: CallerContext::current
/// [`scope`]: CallerContext::scope
/// [`sync_scope`]: CallerContext::sync_scope
#[derive(Debug)]
pub struct CallerContext;

impl CallerContext {
    /// Run a future with `identity` bound as the current caller.
    ///
    /// All code executed by `f`, including code that reads
    /// [`CallerContext::current`] deep in the call stack, observes this
    /// identity. The binding is dropped when `f` completes or is cancelled.
    ///
    /// Nested scopes shadow the outer binding for their duration.
    pub async fn scope<F>(identity: CallerIdentity, f: F) -> F::Output
    where
        F: Future,
    {
        tracing::debug!(principal = %identity.principal(), tenant_id = %identity.tenant_id(), "Binding caller context");
        CURRENT_CALLER.scope(identity, f).await
    }

    /// Run a synchronous closure with `identity` bound as the current caller.
    pub fn sync_scope<F, R>(identity: CallerIdentity, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_CALLER.sync_scope(identity, f)
    }

    /// The identity bound to the current task, if any.
    ///
    /// Returns `None` when called outside any [`scope`] — the
    /// unauthenticated/system state. Callers that require an identity are
    /// expected to treat `None` as an error, never as an implicit default.
    ///
    /// [`scope`]: CallerContext::scope
    #[must_use]
    pub fn current() -> Option<CallerIdentity> {
        CURRENT_CALLER.try_with(Clone::clone).ok()
    }

    /// Whether an identity is bound to the current task.
    #[must_use]
    pub fn is_bound() -> bool {
        CURRENT_CALLER.try_with(|_| ()).is_ok()
    }
}
