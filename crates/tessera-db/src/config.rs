//! Tenant pool configuration.
//!
//! The registry is populated from an explicit, statically validated list of
//! (tenant id, connection parameters) pairs. Discovery-by-convention (the
//! original derives tenant ids from pool-name suffixes) stays out of the
//! core; whatever supplies these entries must have resolved ids already.

use serde::Deserialize;
use tessera_core::TenantId;

/// Connection configuration for one tenant's pool.
///
/// Credentials are carried inside the connection URL, following the sqlx
/// convention (`postgres://user:pw@host:port/db`).
///
/// # Example
///
/// ```
/// use tessera_core::TenantId;
/// use tessera_db::TenantPoolConfig;
///
/// let config = TenantPoolConfig::new(
///     TenantId::from_i32(1),
///     "postgres://user:pw@localhost:5431/user",
/// );
/// assert_eq!(config.max_connections, 5);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TenantPoolConfig {
    /// The tenant this pool serves. Unique within one registry.
    pub tenant_id: TenantId,
    /// Database connection URL, including credentials.
    pub url: String,
    /// Maximum number of connections held by the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl TenantPoolConfig {
    /// Create a configuration with default pool sizing.
    pub fn new(tenant_id: TenantId, url: impl Into<String>) -> Self {
        Self {
            tenant_id,
            url: url.into(),
            max_connections: default_max_connections(),
        }
    }

    /// Set the maximum number of pooled connections.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}
