//! Agent state, action sampling, and the action protocol for the Lexigraph
//! simulation.
//!
//! This crate contains the logic layer for agents. It never owns the
//! global clock, snapshot, or ledger; those are reached through the
//! [`TurnContext`] handed into every action.
//!
//! # Modules
//!
//! - [`actions`] -- `take_action` dispatch plus form, steal, and pass handlers
//! - [`agent`] -- Per-node agent state ([`Agent`])
//! - [`context`] -- The [`TurnContext`] seam to the environment
//! - [`error`] -- Error types for agent operations ([`AgentError`])
//! - [`inventory`] -- Needed-letter computation and letter consumption
//! - [`registry`] -- All agents of a game, keyed by node ([`AgentRegistry`])
//! - [`sampler`] -- Weighted categorical action draw ([`ActionSampler`])

pub mod actions;
pub mod agent;
pub mod context;
pub mod error;
pub mod inventory;
pub mod registry;
pub mod sampler;

// Re-export primary types at crate root for convenience.
pub use actions::{perform_action, take_action};
pub use agent::Agent;
pub use context::TurnContext;
pub use error::AgentError;
pub use registry::AgentRegistry;
pub use sampler::ActionSampler;
