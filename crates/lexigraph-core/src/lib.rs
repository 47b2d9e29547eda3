//! Global clock, shared state, and the turn loop for the Lexigraph simulation.
//!
//! This crate owns the environment: the clock, the current world snapshot
//! and its history, the word ledger, and the round loop that gives every
//! agent one action per round.
//!
//! # Modules
//!
//! - [`clock`] -- Global tick counter with an upper bound ([`GameClock`])
//! - [`config`] -- Configuration loading from `lexigraph-config.yaml`
//! - [`environment`] -- Game setup and the round loop ([`Environment`])
//! - [`export`] -- Audit-log CSV/JSON export
//! - [`runner`] -- Run summaries and end-of-run logging
//! - [`state`] -- Snapshot, history, and ledger ([`SharedState`])
//!
//! [`GameClock`]: clock::GameClock
//! [`Environment`]: environment::Environment
//! [`SharedState`]: state::SharedState

pub mod clock;
pub mod config;
pub mod environment;
pub mod export;
pub mod runner;
pub mod state;
