//! Typed node identifiers.
//!
//! Nodes in the game graph are numbered densely from zero by the graph
//! generator. Wrapping the index keeps node ids from being mixed up with
//! tick numbers and counters, which are plain integers too.

use serde::{Deserialize, Serialize};

/// Identifier of a node (and of the agent living on it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
