//! Identity-to-pool routing.
//!
//! [`TenantRouter`] is consulted immediately before every database
//! operation: it reads the caller context, maps the identity to a tenant id
//! through an injected strategy function, and looks the tenant up in the
//! pool registry. Registry setup is deferred to the first resolution and
//! runs exactly once, however many operations race to trigger it.

use crate::bootstrap::Bootstrap;
use crate::config::TenantPoolConfig;
use crate::error::{DbError, Result};
use crate::pool::TenantPool;
use crate::registry::PoolRegistry;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tessera_context::CallerContext;
use tessera_core::{CallerIdentity, TenantId};
use tokio::sync::OnceCell;

type SetupFuture<P> = Pin<Box<dyn Future<Output = Result<PoolRegistry<P>>> + Send>>;
type SetupFn<P> = Box<dyn Fn() -> SetupFuture<P> + Send + Sync>;
type StrategyFn = Box<dyn Fn(&CallerIdentity) -> TenantId + Send + Sync>;

/// Routes the current caller to its tenant's pool handle.
///
/// The router is a single concrete type; the one configurable step, how a
/// [`CallerIdentity`] yields a [`TenantId`], is a strategy function
/// injected at construction (default: the identity's own tenant
/// affiliation). There is no fallback pool: an unknown tenant or a missing
/// identity is an error, never a silent default, because routing to the
/// wrong tenant's data is the failure mode this type exists to prevent.
///
/// Registry setup runs lazily on first resolution, guarded by a
/// single-winner primitive: exactly one caller populates and freezes the
/// registry while concurrent callers wait for completion. Nobody ever
/// observes a partially populated registry. Safe to share behind an `Arc`
/// and call from many tasks at once.
pub struct TenantRouter<P> {
    registry: OnceCell<PoolRegistry<P>>,
    // None only when the cell was pre-populated via `from_registry`.
    setup: Option<SetupFn<P>>,
    strategy: StrategyFn,
}

impl<P> TenantRouter<P>
where
    P: Clone + Send + Sync + 'static,
{
    /// Create a router with deferred registry setup.
    ///
    /// `setup` is invoked by the first resolution; it populates a registry
    /// (opening pools, applying bootstrap) and returns it. The router
    /// freezes the result before publishing it.
    pub fn new<F, Fut>(setup: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<PoolRegistry<P>>> + Send + 'static,
    {
        Self::with_strategy(setup, |identity: &CallerIdentity| identity.tenant_id())
    }

    /// Create a router with a custom identity-to-tenant strategy.
    pub fn with_strategy<F, Fut, S>(setup: F, strategy: S) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<PoolRegistry<P>>> + Send + 'static,
        S: Fn(&CallerIdentity) -> TenantId + Send + Sync + 'static,
    {
        Self {
            registry: OnceCell::new(),
            setup: Some(Box::new(move || Box::pin(setup()))),
            strategy: Box::new(strategy),
        }
    }

    /// Create a router over an already-populated registry.
    ///
    /// The registry is frozen here; no deferred setup runs. Useful when
    /// the embedder wires pools eagerly at startup.
    #[must_use]
    pub fn from_registry(mut registry: PoolRegistry<P>) -> Self {
        registry.freeze();
        Self {
            registry: OnceCell::new_with(Some(registry)),
            setup: None,
            strategy: Box::new(|identity: &CallerIdentity| identity.tenant_id()),
        }
    }

    /// Resolve the pool handle for the caller bound to the current task.
    ///
    /// Invoked before every database operation, so the pool used is always
    /// the one matching the identity active at the moment of the call.
    ///
    /// # Errors
    ///
    /// - [`DbError::NoCallerIdentity`] if no identity is bound
    /// - [`DbError::UnknownTenant`] if the identity's tenant is not
    ///   registered (no database access is performed in that case)
    /// - any error from the one-time registry setup
    pub async fn resolve_source(&self) -> Result<P> {
        let registry = self.registry().await?;
        let identity = CallerContext::current().ok_or(DbError::NoCallerIdentity)?;
        self.lookup(registry, &identity)
    }

    /// Resolve the pool handle for an explicitly supplied identity.
    ///
    /// Same contract as [`resolve_source`](Self::resolve_source), for
    /// callers that pass the context as a direct parameter instead of
    /// through the task-local slot.
    pub async fn resolve_for(&self, identity: &CallerIdentity) -> Result<P> {
        let registry = self.registry().await?;
        self.lookup(registry, identity)
    }

    fn lookup(&self, registry: &PoolRegistry<P>, identity: &CallerIdentity) -> Result<P> {
        let tenant_id = (self.strategy)(identity);
        tracing::debug!(
            principal = identity.principal(),
            tenant_id = %tenant_id,
            "Resolving pool for caller"
        );
        registry
            .lookup(tenant_id)
            .cloned()
            .ok_or(DbError::UnknownTenant(tenant_id))
    }

    /// Get the registry, running the one-time deferred setup if needed.
    ///
    /// `OnceCell` guarantees a single initializer: one caller wins the
    /// race and runs setup + freeze; concurrent callers wait and then
    /// observe the fully initialized registry.
    async fn registry(&self) -> Result<&PoolRegistry<P>> {
        self.registry
            .get_or_try_init(|| async {
                let mut registry = match &self.setup {
                    Some(setup) => setup().await?,
                    // Unreachable in practice: the cell is pre-populated
                    // whenever setup is None.
                    None => PoolRegistry::new(),
                };
                registry.freeze();
                Ok(registry)
            })
            .await
    }

    /// Whether the one-time registry setup has completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.registry.initialized()
    }
}

impl TenantRouter<TenantPool> {
    /// Create a router whose deferred setup opens a pool per configured
    /// tenant, applies the bootstrap, and registers it.
    ///
    /// This is the production wiring: configuration is an explicit list of
    /// (tenant id, connection parameters) pairs, and setup failure (e.g. a
    /// pool unreachable) surfaces from the first resolution and should be
    /// treated as fatal.
    #[must_use]
    pub fn from_configs(configs: Vec<TenantPoolConfig>, bootstrap: Bootstrap) -> Self {
        let configs = Arc::new(configs);
        let bootstrap = Arc::new(bootstrap);
        Self::new(move || {
            let configs = Arc::clone(&configs);
            let bootstrap = Arc::clone(&bootstrap);
            async move {
                let mut registry = PoolRegistry::new();
                for config in configs.iter() {
                    let pool = TenantPool::connect(config).await?;
                    bootstrap.apply(&pool).await?;
                    registry.register(config.tenant_id, pool)?;
                    tracing::info!(tenant_id = %config.tenant_id, "Initialized pool for tenant");
                }
                Ok(registry)
            }
        })
    }
}

impl<P> std::fmt::Debug for TenantRouter<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantRouter")
            .field("initialized", &self.registry.initialized())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tid(id: i32) -> TenantId {
        TenantId::from_i32(id)
    }

    fn identity(principal: &str, tenant: i32) -> CallerIdentity {
        CallerIdentity::new(principal, tid(tenant), ["USER"])
    }

    /// Router over stub string handles: {1 -> "poolA", 2 -> "poolB"}.
    fn stub_router() -> TenantRouter<&'static str> {
        TenantRouter::new(|| async {
            let mut registry = PoolRegistry::new();
            registry.register(tid(1), "poolA")?;
            registry.register(tid(2), "poolB")?;
            Ok(registry)
        })
    }

    #[tokio::test]
    async fn test_resolves_own_tenants_pool() {
        let router = stub_router();

        let pool = CallerContext::scope(identity("rwinch", 1), router.resolve_source()).await;
        assert_eq!(pool.unwrap(), "poolA");

        let pool = CallerContext::scope(identity("jlong", 2), router.resolve_source()).await;
        assert_eq!(pool.unwrap(), "poolB");
    }

    #[tokio::test]
    async fn test_no_identity_fails_every_time() {
        let router = stub_router();

        for _ in 0..3 {
            let err = router.resolve_source().await.unwrap_err();
            assert!(err.is_no_caller_identity());
        }
    }

    #[tokio::test]
    async fn test_unknown_tenant_fails() {
        let router = stub_router();

        let result =
            CallerContext::scope(identity("stranger", 3), router.resolve_source()).await;
        let err = result.unwrap_err();
        assert!(matches!(err, DbError::UnknownTenant(t) if t == tid(3)));
    }

    #[tokio::test]
    async fn test_resolve_for_explicit_identity() {
        let router = stub_router();

        // No ambient binding required.
        let pool = router.resolve_for(&identity("jlong", 2)).await.unwrap();
        assert_eq!(pool, "poolB");
    }

    #[tokio::test]
    async fn test_setup_runs_lazily() {
        let router = stub_router();
        assert!(!router.is_initialized());

        router.resolve_for(&identity("rwinch", 1)).await.unwrap();
        assert!(router.is_initialized());
    }

    #[tokio::test]
    async fn test_concurrent_first_use_runs_setup_once() {
        let setups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&setups);
        let router = Arc::new(TenantRouter::new(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                // Give the other tasks time to pile up on the init.
                tokio::task::yield_now().await;
                let mut registry = PoolRegistry::new();
                registry.register(tid(1), "poolA")?;
                registry.register(tid(2), "poolB")?;
                Ok(registry)
            }
        }));

        let mut handles = Vec::new();
        for i in 0..16 {
            let router = Arc::clone(&router);
            let tenant = if i % 2 == 0 { 1 } else { 2 };
            handles.push(tokio::spawn(async move {
                CallerContext::scope(identity("caller", tenant), async move {
                    router.resolve_source().await
                })
                .await
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let pool = handle.await.unwrap().unwrap();
            let expected = if i % 2 == 0 { "poolA" } else { "poolB" };
            assert_eq!(pool, expected, "caller {i} routed to the wrong pool");
        }

        assert_eq!(setups.load(Ordering::SeqCst), 1, "setup must run exactly once");
    }

    #[tokio::test]
    async fn test_setup_failure_surfaces() {
        let router: TenantRouter<&'static str> =
            TenantRouter::new(|| async { Err(DbError::ConnectionFailed(sqlx::Error::PoolClosed)) });

        let err = router.resolve_for(&identity("rwinch", 1)).await.unwrap_err();
        assert!(err.is_connection_error());
        assert!(!router.is_initialized());
    }

    #[tokio::test]
    async fn test_custom_strategy() {
        // Route every caller by a role-derived tenant rather than the
        // identity's own affiliation.
        let router = TenantRouter::with_strategy(
            || async {
                let mut registry = PoolRegistry::new();
                registry.register(tid(1), "poolA")?;
                Ok(registry)
            },
            |_: &CallerIdentity| tid(1),
        );

        let pool = router.resolve_for(&identity("anyone", 99)).await.unwrap();
        assert_eq!(pool, "poolA");
    }

    #[tokio::test]
    async fn test_from_registry_is_initialized() {
        let mut registry = PoolRegistry::new();
        registry.register(tid(1), "poolA").unwrap();
        let router = TenantRouter::from_registry(registry);

        assert!(router.is_initialized());
        let pool = router.resolve_for(&identity("rwinch", 1)).await.unwrap();
        assert_eq!(pool, "poolA");
    }
}
