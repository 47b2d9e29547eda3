//! Random game-graph generator.
//!
//! Draws Erdős–Rényi `G(n, p)` graphs until one is connected, then labels
//! each node selfish or altruistic and gives it that strategy's
//! action-probability profile. Profiles are parameterized by `p_star`:
//!
//! | strategy   | form   | steal | pass  | think      |
//! |------------|--------|-------|-------|------------|
//! | selfish    | p*/2   | 2p*   | p*    | 1 − 3.5p*  |
//! | altruistic | p*/2   | p*    | 2p*   | 1 − 3.5p*  |

use std::collections::BTreeMap;

use lexigraph_types::{NodeAttributes, NodeId, Strategy};
use rand::Rng;
use tracing::{debug, info};

use crate::error::GraphError;
use crate::topology::Topology;

/// Largest `p_star` for which the think slot stays non-negative.
const MAX_P_STAR: f64 = 2.0 / 7.0;

/// Input parameters of the generator (the CLI's positional arguments).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkParams {
    /// Number of nodes.
    pub num_nodes: usize,
    /// Probability of each possible edge.
    pub edge_probability: f64,
    /// Probability that a node is labeled selfish.
    pub selfish_fraction: f64,
    /// Sampling-density parameter of the strategy profiles.
    pub p_star: f64,
}

/// Action-probability vectors for each strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyProfiles {
    /// Profile of selfish nodes.
    pub selfish: [f64; 4],
    /// Profile of altruistic nodes.
    pub altruistic: [f64; 4],
}

impl StrategyProfiles {
    /// Derive both profiles from `p_star`.
    pub fn from_p_star(p_star: f64) -> Self {
        let think = 1.0 - 3.5 * p_star;
        Self {
            selfish: [p_star / 2.0, 2.0 * p_star, p_star, think],
            altruistic: [p_star / 2.0, p_star, 2.0 * p_star, think],
        }
    }

    /// Profile for `strategy`.
    pub const fn for_strategy(&self, strategy: Strategy) -> [f64; 4] {
        match strategy {
            Strategy::Selfish => self.selfish,
            Strategy::Altruistic => self.altruistic,
        }
    }
}

/// Validated generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Network {
    /// Generator parameters.
    params: NetworkParams,
    /// Profiles derived from `params.p_star`.
    profiles: StrategyProfiles,
}

impl Network {
    /// Validate parameters and build a generator.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoNodes`], [`GraphError::TooManyNodes`],
    /// [`GraphError::InvalidProbability`], or [`GraphError::InvalidPStar`].
    pub fn new(params: NetworkParams) -> Result<Self, GraphError> {
        if params.num_nodes == 0 {
            return Err(GraphError::NoNodes);
        }
        if u32::try_from(params.num_nodes).is_err() {
            return Err(GraphError::TooManyNodes(params.num_nodes));
        }
        check_probability("edge_probability", params.edge_probability)?;
        check_probability("selfish_fraction", params.selfish_fraction)?;
        if !(0.0..=MAX_P_STAR).contains(&params.p_star) {
            return Err(GraphError::InvalidPStar {
                value: params.p_star,
            });
        }
        Ok(Self {
            params,
            profiles: StrategyProfiles::from_p_star(params.p_star),
        })
    }

    /// Generator parameters.
    pub const fn params(&self) -> NetworkParams {
        self.params
    }

    /// Strategy profiles in use.
    pub const fn profiles(&self) -> StrategyProfiles {
        self.profiles
    }

    /// Draw a connected random graph and label its nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Disconnected`] if no connected graph turns up
    /// within `max_attempts` draws.
    pub fn make_random_graph<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<Topology, GraphError> {
        let ids = self.node_ids()?;
        // Attributes are irrelevant to connectivity; placeholders until one
        // graph survives.
        let placeholder: BTreeMap<NodeId, NodeAttributes> = ids
            .iter()
            .map(|id| {
                (*id, NodeAttributes {
                    strategy: Strategy::Altruistic,
                    action_probabilities: self.profiles.altruistic,
                })
            })
            .collect();

        for attempt in 1..=max_attempts {
            let edges = sample_edges(&ids, self.params.edge_probability, rng);
            let candidate = Topology::from_edges(placeholder.clone(), &edges)?;
            if candidate.is_connected() {
                debug!(attempt, edges = edges.len(), "Connected graph drawn");
                let attributes = self.assign_strategies(&ids, rng);
                let topology = Topology::from_edges(attributes, &edges)?;
                log_node_table(&topology);
                return Ok(topology);
            }
        }
        Err(GraphError::Disconnected {
            attempts: max_attempts,
        })
    }

    /// Label each node selfish with probability `selfish_fraction`.
    fn assign_strategies<R: Rng + ?Sized>(
        &self,
        ids: &[NodeId],
        rng: &mut R,
    ) -> BTreeMap<NodeId, NodeAttributes> {
        ids.iter()
            .map(|id| {
                let strategy = if rng.random_bool(self.params.selfish_fraction) {
                    Strategy::Selfish
                } else {
                    Strategy::Altruistic
                };
                (*id, NodeAttributes {
                    strategy,
                    action_probabilities: self.profiles.for_strategy(strategy),
                })
            })
            .collect()
    }

    fn node_ids(&self) -> Result<Vec<NodeId>, GraphError> {
        let count = u32::try_from(self.params.num_nodes)
            .map_err(|_err| GraphError::TooManyNodes(self.params.num_nodes))?;
        Ok((0..count).map(NodeId).collect())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), GraphError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GraphError::InvalidProbability { name, value })
    }
}

/// Include each unordered pair independently with probability `p`.
fn sample_edges<R: Rng + ?Sized>(ids: &[NodeId], p: f64, rng: &mut R) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::new();
    for (i, a) in ids.iter().enumerate() {
        for b in ids.iter().skip(i.saturating_add(1)) {
            if rng.random_bool(p) {
                edges.push((*a, *b));
            }
        }
    }
    edges
}

/// Emit one `info` line per node: strategy, probabilities, neighbors, degree.
pub fn log_node_table(topology: &Topology) {
    for (node, data) in topology.node_data() {
        info!(
            node = %format!("v{node}"),
            strategy = %data.strategy,
            p_act = ?data.action_probabilities,
            neighbors = ?data.neighbors,
            degree = data.degree,
            "Graph node"
        );
    }
}
