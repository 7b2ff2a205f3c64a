//! Generated identifiers
//!
//! Roadmap and node ids are always generated locally (ULID-backed, so
//! time-prefixed and sortable) and never trusted from external input.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Roadmap document identifier
///
/// Immutable once the document is created; the validator always
/// generates a fresh one regardless of what the untrusted input claims.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadmapId(String);

impl RoadmapId {
    /// Generate a new roadmap id (`roadmap-` prefix + ULID)
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("roadmap-{}", Ulid::new()))
    }

    /// View as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RoadmapId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for RoadmapId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for RoadmapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node identifier, unique within one roadmap
///
/// Generated ids are short lowercase tokens; ids supplied by the model
/// are kept verbatim when present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generate a new short node token (`n-` prefix + ULID random tail)
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        let ulid = Ulid::new().to_string();
        // Last 10 chars are pure randomness; enough for a per-document token
        Self(format!("n-{}", ulid[16..].to_lowercase()))
    }

    /// View as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
