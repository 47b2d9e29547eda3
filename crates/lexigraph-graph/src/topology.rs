//! Undirected game graph with node attributes and edge weights.
//!
//! Adjacency is kept as `BTreeMap<NodeId, BTreeSet<NodeId>>`, so neighbor
//! lists always come out in ascending id order. Edge weights are keyed by
//! `(low, high)` endpoint pairs.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use lexigraph_types::{NodeAttributes, NodeData, NodeId};

use crate::error::GraphError;

/// An undirected graph whose nodes carry strategy attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    /// Attributes of every node.
    attributes: BTreeMap<NodeId, NodeAttributes>,
    /// Neighbor sets.
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    /// Cosine similarity of endpoint probability vectors, per edge.
    weights: BTreeMap<(NodeId, NodeId), f64>,
}

impl Topology {
    /// Build a topology from node attributes and an undirected edge list.
    ///
    /// Duplicate edges collapse into one. Edge weights are the cosine
    /// similarity of the endpoints' action-probability vectors, rounded to
    /// two decimals.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoNodes`] for an empty attribute map,
    /// [`GraphError::UnknownNode`] for an edge endpoint without attributes,
    /// or [`GraphError::SelfLoop`].
    pub fn from_edges(
        attributes: BTreeMap<NodeId, NodeAttributes>,
        edges: &[(NodeId, NodeId)],
    ) -> Result<Self, GraphError> {
        if attributes.is_empty() {
            return Err(GraphError::NoNodes);
        }
        let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> =
            attributes.keys().map(|id| (*id, BTreeSet::new())).collect();
        let mut weights = BTreeMap::new();

        for &(a, b) in edges {
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            let attrs_a = attributes.get(&a).ok_or(GraphError::UnknownNode(a))?;
            let attrs_b = attributes.get(&b).ok_or(GraphError::UnknownNode(b))?;
            adjacency.entry(a).or_default().insert(b);
            adjacency.entry(b).or_default().insert(a);
            let weight = round2(cosine_similarity(
                &attrs_a.action_probabilities,
                &attrs_b.action_probabilities,
            ));
            weights.insert(edge_key(a, b), weight);
        }

        Ok(Self {
            attributes,
            adjacency,
            weights,
        })
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.attributes.keys().copied().collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.attributes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Attributes of `node`.
    pub fn attributes(&self, node: NodeId) -> Option<&NodeAttributes> {
        self.attributes.get(&node)
    }

    /// Neighbors of `node` in ascending order (empty for unknown nodes).
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.adjacency
            .get(&node)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Degree of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeSet::len)
    }

    /// Weight of the edge between `a` and `b`, if there is one.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.weights.get(&edge_key(a, b)).copied()
    }

    /// Whether every node is reachable from every other.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.adjacency.keys().next().copied() else {
            return false;
        };
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for next in self.adjacency.get(&node).into_iter().flatten() {
                if seen.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }
        seen.len() == self.adjacency.len()
    }

    /// The static node-data table consumed by the environment.
    pub fn node_data(&self) -> BTreeMap<NodeId, NodeData> {
        self.attributes
            .iter()
            .map(|(id, attrs)| {
                let neighbors = self.neighbors(*id);
                (
                    *id,
                    NodeData {
                        strategy: attrs.strategy,
                        action_probabilities: attrs.action_probabilities,
                        degree: neighbors.len(),
                        neighbors,
                    },
                )
            })
            .collect()
    }
}

const fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a.0 <= b.0 { (a, b) } else { (b, a) }
}

/// Cosine similarity of two probability vectors (0 if either is all zero).
pub fn cosine_similarity(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    let denom = norm_a * norm_b;
    if denom > 0.0 { dot / denom } else { 0.0 }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
