//! All agents of a game, keyed by node.
//!
//! The registry is how one agent's action reaches a neighbor's inventory:
//! steal reads a neighbor, pass writes one. Iteration is always in
//! ascending node order, which keeps turn order deterministic.

use std::collections::BTreeMap;

use lexigraph_types::{ActionRecord, NodeId, WorldSnapshot};

use crate::agent::Agent;
use crate::error::AgentError;

/// Owns every [`Agent`] in the game.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    /// Agents indexed by node id.
    agents: BTreeMap<NodeId, Agent>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            agents: BTreeMap::new(),
        }
    }

    /// Register an agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::DuplicateAgent`] if the node already has one.
    pub fn insert(&mut self, agent: Agent) -> Result<(), AgentError> {
        let node = agent.node();
        if self.agents.contains_key(&node) {
            return Err(AgentError::DuplicateAgent(node));
        }
        self.agents.insert(node, agent);
        Ok(())
    }

    /// Check that every neighbor id names a registered agent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::UnknownNeighbor`] for the first dangling id.
    pub fn validate_neighbors(&self) -> Result<(), AgentError> {
        for (node, agent) in &self.agents {
            if let Some(missing) = agent
                .neighbors()
                .iter()
                .find(|n| !self.agents.contains_key(n))
            {
                return Err(AgentError::UnknownNeighbor {
                    node: *node,
                    neighbor: *missing,
                });
            }
        }
        Ok(())
    }

    /// Look up an agent.
    pub fn get(&self, node: NodeId) -> Option<&Agent> {
        self.agents.get(&node)
    }

    /// Look up an agent, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::AgentNotFound`].
    pub fn require(&self, node: NodeId) -> Result<&Agent, AgentError> {
        self.agents.get(&node).ok_or(AgentError::AgentNotFound(node))
    }

    /// Look up an agent mutably, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::AgentNotFound`].
    pub fn require_mut(&mut self, node: NodeId) -> Result<&mut Agent, AgentError> {
        self.agents
            .get_mut(&node)
            .ok_or(AgentError::AgentNotFound(node))
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Node ids in turn order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.agents.keys().copied().collect()
    }

    /// Iterate agents in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Iterate agents mutably in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.values_mut()
    }

    /// Every agent's available letters, concatenated in turn order.
    pub fn letter_pool(&self) -> Vec<char> {
        self.agents
            .values()
            .flat_map(|agent| agent.letters().iter())
            .collect()
    }

    /// The current inventory of every agent.
    pub fn snapshot(&self) -> WorldSnapshot {
        self.agents
            .iter()
            .map(|(node, agent)| (*node, agent.letters().clone()))
            .collect()
    }

    /// All audit records, sorted by global time (ties keep turn order).
    pub fn audit_log(&self) -> Vec<ActionRecord> {
        let mut records: Vec<ActionRecord> = self
            .agents
            .values()
            .flat_map(|agent| agent.log().iter().cloned())
            .collect();
        records.sort_by_key(|record| record.time);
        records
    }
}
