//! Error types for the `lexigraph-graph` crate.

use lexigraph_types::NodeId;

/// Errors that can occur while building a game graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A probability parameter fell outside `[0, 1]`.
    #[error("invalid probability {name} = {value}: must be within [0, 1]")]
    InvalidProbability {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// `p_star` would give some action a negative probability.
    #[error("invalid p_star {value}: must be within [0, 2/7]")]
    InvalidPStar {
        /// The rejected value.
        value: f64,
    },

    /// A graph needs at least one node.
    #[error("graph must have at least one node")]
    NoNodes,

    /// More nodes were requested than node ids can address.
    #[error("too many nodes: {0}")]
    TooManyNodes(usize),

    /// No connected graph was drawn within the attempt budget.
    #[error("no connected graph after {attempts} attempts")]
    Disconnected {
        /// How many graphs were sampled.
        attempts: u32,
    },

    /// An edge refers to a node without attributes.
    #[error("edge endpoint {0} is not a node")]
    UnknownNode(NodeId),

    /// An edge joins a node to itself.
    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),
}
