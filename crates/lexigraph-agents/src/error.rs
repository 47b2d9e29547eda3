//! Error types for the lexigraph-agents crate.
//!
//! Only contract violations are errors here. A steal with no donor, a pass
//! with no recipient, or a premature form are ordinary outcomes recorded in
//! the audit log, not errors.

use lexigraph_types::NodeId;

/// Errors that can occur during agent operations.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// An action was invoked after the global clock reached its bound.
    #[error("tick limit reached: clock is at {time}, maximum is {time_max}")]
    TickLimitReached {
        /// The clock value when the action was attempted.
        time: u64,
        /// The configured maximum.
        time_max: u64,
    },

    /// A node's action-probability vector is unusable.
    #[error("invalid action probabilities for node {node}: {reason}")]
    InvalidActionProbabilities {
        /// The node whose vector was rejected.
        node: NodeId,
        /// Why the vector was rejected.
        reason: String,
    },

    /// An action draw returned a slot with no action.
    #[error("action draw for node {node} returned slot {slot}")]
    InvalidActionSlot {
        /// The node whose sampler drew the slot.
        node: NodeId,
        /// The slot index.
        slot: usize,
    },

    /// Agent with the given node id was not found in the registry.
    #[error("agent not found: {0}")]
    AgentNotFound(NodeId),

    /// A neighbor list names a node that has no agent.
    #[error("node {node} lists unknown neighbor {neighbor}")]
    UnknownNeighbor {
        /// The node with the bad neighbor list.
        node: NodeId,
        /// The missing neighbor.
        neighbor: NodeId,
    },

    /// An agent with this node id is already registered.
    #[error("duplicate agent for node {0}")]
    DuplicateAgent(NodeId),

    /// Hands cannot be dealt from an empty alphabet.
    #[error("cannot deal letters from an empty alphabet")]
    EmptyAlphabet,

    /// The global clock would overflow.
    #[error("clock overflow at time {time}")]
    ClockOverflow {
        /// The clock value that could not be advanced.
        time: u64,
    },

    /// A counter overflowed.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being counted.
        context: String,
    },
}
