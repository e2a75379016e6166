use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject identifier of an authenticated farmer (the verified token's `sub`).
///
/// Only ever produced by an `IdentityVerifier` or read back from the store,
/// never taken from client input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmerId(String);

impl FarmerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FarmerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FarmerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FarmerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Parses a store identifier taken from a request path.
///
/// Malformed input is indistinguishable from an unknown id for callers, so
/// this returns `None` rather than a parse error.
pub fn parse_store_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
