//! Request correlation identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation id attached to every request and echoed in every response.
///
/// Unlike the other values in this workspace this is deliberately an opaque
/// string, not a parsed UUID: callers may supply arbitrary ids via the
/// `X-Request-ID` header and we pass them through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh random id (UUIDv4, matching what clients usually send).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
