//! Integration test helpers for tessera-db.
//!
//! Builds a two-tenant deployment over in-memory SQLite pools driven
//! through the same `Any`-backed code path production uses with Postgres.

use std::sync::{Arc, Once};
use tessera_core::{CallerIdentity, TenantId};
use tessera_db::{Bootstrap, CustomerStore, TenantPool, TenantPoolConfig, TenantRouter};

static INIT: Once = Once::new();

/// Initialize logging for tests (once).
pub fn init_test_logging() {
    INIT.call_once(|| {
        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init()
                .ok();
        }
    });
}

/// SQLite flavor of the customer schema; Postgres deployments use
/// BIGSERIAL instead.
pub const SCHEMA: &str =
    "CREATE TABLE IF NOT EXISTS customer (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)";

pub const TENANT_ONE: TenantId = TenantId::from_i32(1);
pub const TENANT_TWO: TenantId = TenantId::from_i32(2);

/// Identity for the tenant-1 demo principal.
pub fn rwinch() -> CallerIdentity {
    CallerIdentity::new("rwinch", TENANT_ONE, ["USER"])
}

/// Identity for the tenant-2 demo principal.
pub fn jlong() -> CallerIdentity {
    CallerIdentity::new("jlong", TENANT_TWO, ["USER"])
}

/// Test context with a router over two in-memory tenant pools.
pub struct TestContext {
    pub router: Arc<TenantRouter<TenantPool>>,
    pub store: CustomerStore,
}

impl TestContext {
    /// Two empty tenant stores, schema applied at first use.
    pub fn new() -> Self {
        Self::with_bootstrap(Bootstrap::new().with_schema(SCHEMA))
    }

    /// Two tenant stores seeded with overlapping ids and names, so
    /// isolation failures cannot hide behind disjoint data.
    pub fn seeded() -> Self {
        Self::with_bootstrap(
            Bootstrap::new()
                .with_schema(SCHEMA)
                .with_seed(
                    TENANT_ONE,
                    "INSERT INTO customer (name) VALUES ('Ada'); \
                     INSERT INTO customer (name) VALUES ('Grace')",
                )
                .with_seed(TENANT_TWO, "INSERT INTO customer (name) VALUES ('Ada')"),
        )
    }

    fn with_bootstrap(bootstrap: Bootstrap) -> Self {
        init_test_logging();

        // One connection per pool: an in-memory SQLite database lives and
        // dies with its connection.
        let configs = vec![
            TenantPoolConfig::new(TENANT_ONE, "sqlite::memory:").with_max_connections(1),
            TenantPoolConfig::new(TENANT_TWO, "sqlite::memory:").with_max_connections(1),
        ];

        let router = Arc::new(TenantRouter::from_configs(configs, bootstrap));
        let store = CustomerStore::new(Arc::clone(&router));
        Self { router, store }
    }
}
