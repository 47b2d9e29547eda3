//! Core data structs shared across the workspace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{ActionKind, Strategy};
use crate::ids::NodeId;

// ---------------------------------------------------------------------------
// Letter inventory
// ---------------------------------------------------------------------------

/// An agent's letters, partitioned by how they were acquired.
///
/// The three sequences together (with repetition) are the letters the agent
/// currently has available. Initial letters are never consumed; stolen and
/// received letters are spent when a word is formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterInventory {
    /// Letters dealt at game start.
    pub initial: Vec<char>,
    /// Letters copied from neighbors through steal actions.
    pub stolen: Vec<char>,
    /// Letters given by neighbors through pass actions.
    pub received: Vec<char>,
}

impl LetterInventory {
    /// Create an inventory holding only an initial hand.
    pub const fn with_initial(initial: Vec<char>) -> Self {
        Self {
            initial,
            stolen: Vec::new(),
            received: Vec::new(),
        }
    }

    /// Iterate the available-letters union: initial, then stolen, then
    /// received, duplicates preserved.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.initial
            .iter()
            .chain(self.stolen.iter())
            .chain(self.received.iter())
            .copied()
    }

    /// Collect the available-letters union.
    pub fn available(&self) -> Vec<char> {
        self.iter().collect()
    }

    /// Whether `letter` appears anywhere in the available union.
    pub fn contains(&self, letter: char) -> bool {
        self.initial.contains(&letter)
            || self.stolen.contains(&letter)
            || self.received.contains(&letter)
    }

    /// Total number of letters held, duplicates included.
    pub fn len(&self) -> usize {
        self.initial
            .len()
            .saturating_add(self.stolen.len())
            .saturating_add(self.received.len())
    }

    /// Whether the agent holds no letters at all.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.stolen.is_empty() && self.received.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Node data
// ---------------------------------------------------------------------------

/// Per-node attributes assigned by the graph generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Strategy label of the node.
    pub strategy: Strategy,
    /// Probabilities of `[form, steal, pass, think]`.
    pub action_probabilities: [f64; 4],
}

/// Static data for one node, fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Strategy label of the node.
    pub strategy: Strategy,
    /// Probabilities of `[form, steal, pass, think]`.
    pub action_probabilities: [f64; 4],
    /// Neighbor ids, in the order they are scanned by steal and pass.
    pub neighbors: Vec<NodeId>,
    /// Out-degree of the node.
    pub degree: usize,
}

// ---------------------------------------------------------------------------
// Ledger and audit records
// ---------------------------------------------------------------------------

/// Entry of the global word-formed ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormedWord {
    /// The completed word.
    pub word: String,
    /// The node that formed it.
    pub node: NodeId,
    /// Global time at which the form action ran.
    pub time: u64,
}

/// One row of an agent's audit log, written after every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Acting node.
    pub node: NodeId,
    /// Strategy label of the acting node.
    pub strategy: Strategy,
    /// Action-probability vector of the acting node.
    pub action_probabilities: [f64; 4],
    /// Neighbors of the acting node.
    pub neighbors: Vec<NodeId>,
    /// Degree of the acting node.
    pub degree: usize,
    /// Target word after the action, if the agent has one.
    pub target: Option<String>,
    /// Available-letters union after the action.
    pub available: Vec<char>,
    /// Needed letters after the action.
    pub needed: Vec<char>,
    /// Global time at which the action ran.
    pub time: u64,
    /// Number of actions this agent has taken, this one included.
    pub actions_taken: u64,
    /// The sampled action.
    pub action: ActionKind,
    /// Whether the action achieved its effect.
    pub success: bool,
    /// Words formed by this agent so far.
    pub words_formed: u64,
}

/// Every agent's inventory at a single tick.
pub type WorldSnapshot = BTreeMap<NodeId, LetterInventory>;
