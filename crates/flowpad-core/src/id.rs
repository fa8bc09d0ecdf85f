//! Identifier types and the shared identifier generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node (compact decimal string: "1", "2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from an arbitrary string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier, if it is a decimal string.
    fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Unique identifier for an edge ("e1-2").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Create an identifier from an arbitrary string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the identifier for an edge between two nodes.
    pub fn between(source: &NodeId, target: &NodeId) -> Self {
        Self(format!("e{source}-{target}"))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Monotonic identifier source shared by every node-creation path.
///
/// One generator per document, owned by it. Reserved identifiers are never
/// handed out twice, even when the creation they were reserved for is
/// cancelled; gaps in the sequence are fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGenerator {
    /// Create a generator starting at "1".
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next node identifier.
    pub fn reserve(&mut self) -> NodeId {
        let id = NodeId::new(self.next.to_string());
        self.next += 1;
        id
    }

    /// Advance past an externally supplied identifier so later mints cannot
    /// collide with it. Non-numeric identifiers are ignored.
    pub fn observe(&mut self, id: &NodeId) {
        if let Some(n) = id.as_number() {
            self.next = self.next.max(n.saturating_add(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_is_monotonic() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.reserve().as_str(), "1");
        assert_eq!(ids.reserve().as_str(), "2");
        assert_eq!(ids.reserve().as_str(), "3");
    }

    #[test]
    fn test_observe_advances_past_seeded_ids() {
        let mut ids = IdGenerator::new();
        ids.observe(&NodeId::from("7"));
        assert_eq!(ids.reserve().as_str(), "8");
    }

    #[test]
    fn test_observe_never_rewinds() {
        let mut ids = IdGenerator::new();
        ids.observe(&NodeId::from("5"));
        ids.observe(&NodeId::from("2"));
        assert_eq!(ids.reserve().as_str(), "6");
    }

    #[test]
    fn test_observe_ignores_non_numeric_ids() {
        let mut ids = IdGenerator::new();
        ids.observe(&NodeId::from("start"));
        assert_eq!(ids.reserve().as_str(), "1");
    }

    #[test]
    fn test_abandoned_reservation_leaves_a_gap() {
        let mut ids = IdGenerator::new();
        let reserved = ids.reserve();
        assert_eq!(reserved.as_str(), "1");
        // The reservation is dropped unused; the next mint must not reuse it.
        assert_eq!(ids.reserve().as_str(), "2");
    }

    #[test]
    fn test_edge_id_between() {
        let id = EdgeId::between(&NodeId::from("1"), &NodeId::from("2"));
        assert_eq!(id.as_str(), "e1-2");
    }
}
