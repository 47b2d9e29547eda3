//! Game-graph generation for the Lexigraph simulation.
//!
//! The environment only needs a node set, a neighbor lookup, and per-node
//! `(strategy, action probabilities)`. This crate produces all three, either
//! from explicit edges or from a random connected `G(n, p)` graph.
//!
//! # Modules
//!
//! - [`error`] -- Error types for graph construction ([`GraphError`])
//! - [`network`] -- Random graph generator with strategy profiles ([`Network`])
//! - [`topology`] -- Undirected graph with node attributes and edge weights ([`Topology`])

pub mod error;
pub mod network;
pub mod topology;

pub use error::GraphError;
pub use network::{Network, NetworkParams, StrategyProfiles};
pub use topology::Topology;
