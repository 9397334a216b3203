//! Caller identity.
//!
//! The authenticated principal executing the current logical operation,
//! together with its tenant affiliation and role set. Produced by the
//! identity provider; read-only from the routing layer's perspective.

use crate::ids::TenantId;
use crate::traits::TenantAware;
use serde::{Deserialize, Serialize};

/// The authenticated principal for one logical operation.
///
/// A `CallerIdentity` is created when an operation's caller is established
/// and discarded when that operation's execution scope ends. It never
/// outlives a single logical unit of work and is never shared between
/// concurrently executing operations.
///
/// # Example
///
/// ```
/// use tessera_core::{CallerIdentity, TenantId};
///
/// let identity = CallerIdentity::new("jlong", TenantId::from_i32(2), ["USER"]);
/// assert_eq!(identity.principal(), "jlong");
/// assert!(identity.has_role("USER"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    principal: String,
    tenant_id: TenantId,
    roles: Vec<String>,
}

impl CallerIdentity {
    /// Create a new caller identity.
    pub fn new<I, S>(principal: impl Into<String>, tenant_id: TenantId, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            principal: principal.into(),
            tenant_id,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// The principal (user) name.
    #[must_use]
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// The tenant this principal belongs to.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// The roles granted to this principal.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Whether the principal holds the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl TenantAware for CallerIdentity {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_populates_fields() {
        let identity = CallerIdentity::new("rwinch", TenantId::from_i32(1), ["USER", "ADMIN"]);
        assert_eq!(identity.principal(), "rwinch");
        assert_eq!(identity.tenant_id(), TenantId::from_i32(1));
        assert_eq!(identity.roles(), &["USER".to_string(), "ADMIN".to_string()]);
    }

    #[test]
    fn test_has_role() {
        let identity = CallerIdentity::new("rwinch", TenantId::from_i32(1), ["USER"]);
        assert!(identity.has_role("USER"));
        assert!(!identity.has_role("ADMIN"));
    }

    #[test]
    fn test_empty_roles() {
        let identity = CallerIdentity::new("system", TenantId::from_i32(1), Vec::<String>::new());
        assert!(identity.roles().is_empty());
        assert!(!identity.has_role("USER"));
    }

    #[test]
    fn test_tenant_aware_impl() {
        let identity = CallerIdentity::new("jlong", TenantId::from_i32(2), ["USER"]);
        let aware: &dyn TenantAware = &identity;
        assert_eq!(aware.tenant_id(), TenantId::from_i32(2));
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = CallerIdentity::new("jlong", TenantId::from_i32(2), ["USER"]);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: CallerIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
