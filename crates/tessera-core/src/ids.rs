//! Strongly Typed Identifiers
//!
//! This module provides the type-safe tenant identifier used throughout
//! tessera. Using the newtype pattern prevents a tenant id from being
//! confused with any other integer at compile time.
//!
//! # Example
//!
//! ```
//! use tessera_core::TenantId;
//!
//! let tenant = TenantId::from_i32(1);
//!
//! // Type safety: cannot pass a bare i32 where TenantId is expected
//! fn requires_tenant(id: TenantId) -> String {
//!     id.to_string()
//! }
//!
//! assert_eq!(requires_tenant(tenant), "1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Strongly typed identifier for tenants.
///
/// Names one isolated tenant partition. Tenant ids are assigned once, at
/// registry build time, from the deployment's pool configuration (the
/// original convention derives them from a numeric pool-name suffix), and
/// are immutable afterwards.
///
/// # Example
///
/// ```
/// use tessera_core::TenantId;
///
/// let tenant_id = TenantId::from_i32(2);
/// assert_eq!(tenant_id.as_i32(), 2);
///
/// // Parse from string
/// let parsed: TenantId = "2".parse().unwrap();
/// assert_eq!(parsed, tenant_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(i32);

impl TenantId {
    /// Creates a tenant ID from a raw integer.
    #[must_use]
    pub const fn from_i32(id: i32) -> Self {
        Self(id)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Display for TenantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TenantId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl FromStr for TenantId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self).map_err(|e| ParseIdError {
            id_type: "TenantId",
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tenant_id_tests {
        use super::*;

        #[test]
        fn test_from_i32_preserves_value() {
            let id = TenantId::from_i32(42);
            assert_eq!(id.as_i32(), 42);
        }

        #[test]
        fn test_display_returns_integer_string() {
            let id = TenantId::from_i32(7);
            assert_eq!(id.to_string(), "7");
        }

        #[test]
        fn test_from_impl() {
            let id: TenantId = 3.into();
            assert_eq!(id, TenantId::from_i32(3));
        }
    }

    mod from_str_tests {
        use super::*;

        #[test]
        fn test_parse_valid_integer() {
            let id: TenantId = "12".parse().unwrap();
            assert_eq!(id.as_i32(), 12);
        }

        #[test]
        fn test_parse_trims_whitespace() {
            let id: TenantId = " 5 ".parse().unwrap();
            assert_eq!(id.as_i32(), 5);
        }

        #[test]
        fn test_parse_invalid_returns_error() {
            let result: std::result::Result<TenantId, _> = "not-a-number".parse();
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert_eq!(err.id_type, "TenantId");
            assert!(!err.message.is_empty());
        }

        #[test]
        fn test_error_display() {
            let result: std::result::Result<TenantId, _> = "oops".parse();
            let display = result.unwrap_err().to_string();
            assert!(display.contains("TenantId"));
            assert!(display.contains("Failed to parse"));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_serializes_as_plain_integer() {
            let id = TenantId::from_i32(1);
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "1");
        }

        #[test]
        fn test_serde_roundtrip() {
            let original = TenantId::from_i32(99);
            let json = serde_json::to_string(&original).unwrap();
            let deserialized: TenantId = serde_json::from_str(&json).unwrap();
            assert_eq!(original, deserialized);
        }
    }

    mod hash_eq_tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn test_can_use_as_hashmap_key() {
            let mut map: HashMap<TenantId, String> = HashMap::new();
            map.insert(TenantId::from_i32(1), "poolA".to_string());
            map.insert(TenantId::from_i32(2), "poolB".to_string());

            assert_eq!(map.get(&TenantId::from_i32(1)), Some(&"poolA".to_string()));
            assert_eq!(map.get(&TenantId::from_i32(2)), Some(&"poolB".to_string()));
        }

        #[test]
        fn test_copy_semantics() {
            let id1 = TenantId::from_i32(4);
            let id2 = id1;
            assert_eq!(id1, id2);
        }
    }
}
