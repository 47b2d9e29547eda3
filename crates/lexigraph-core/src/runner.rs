//! Run summaries and end-of-run logging.
//!
//! [`Environment::play`] hands back a [`RunSummary`]; the binary passes it
//! to [`log_run_end`] before exporting the audit log.
//!
//! [`Environment::play`]: crate::environment::Environment::play

use std::collections::BTreeMap;

use lexigraph_agents::{Agent, AgentRegistry};
use lexigraph_types::{FormedWord, NodeId};
use serde::Serialize;
use tracing::{info, warn};

/// Per-agent totals at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentSummary {
    /// Actions the agent took.
    pub actions_taken: u64,
    /// Words the agent completed.
    pub words_formed: u64,
    /// Target the agent was working on when the run stopped.
    pub final_target: Option<String>,
}

impl AgentSummary {
    /// Read the totals off an agent.
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            actions_taken: agent.actions_taken(),
            words_formed: agent.words_formed(),
            final_target: agent.target().map(str::to_owned),
        }
    }
}

/// Result of [`Environment::play`].
///
/// [`Environment::play`]: crate::environment::Environment::play
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Agent actions executed by this call.
    pub actions_executed: u64,
    /// Clock value when the loop stopped.
    pub final_time: u64,
    /// Ledger of every completed word, in completion order.
    pub words_formed: Vec<FormedWord>,
    /// Totals keyed by node.
    pub per_agent: BTreeMap<NodeId, AgentSummary>,
}

impl RunSummary {
    /// Assemble a summary from the registry and ledger.
    pub fn collect(
        registry: &AgentRegistry,
        actions_executed: u64,
        final_time: u64,
        words_formed: &[FormedWord],
    ) -> Self {
        Self {
            actions_executed,
            final_time,
            words_formed: words_formed.to_vec(),
            per_agent: registry
                .iter()
                .map(|agent| (agent.node(), AgentSummary::from_agent(agent)))
                .collect(),
        }
    }
}

/// Log the end of a run.
pub fn log_run_end(summary: &RunSummary) {
    info!(
        actions_executed = summary.actions_executed,
        final_time = summary.final_time,
        words_formed = summary.words_formed.len(),
        agents = summary.per_agent.len(),
        "Game ended"
    );

    if summary.actions_executed == 0 {
        warn!("Game ended with no actions executed");
    }

    for (node, agent) in &summary.per_agent {
        info!(
            node = %node,
            actions_taken = agent.actions_taken,
            words_formed = agent.words_formed,
            final_target = agent.final_target.as_deref().unwrap_or("-"),
            "Agent totals"
        );
    }
}
