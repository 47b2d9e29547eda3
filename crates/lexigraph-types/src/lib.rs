//! Shared type definitions for the Lexigraph simulation.
//!
//! This crate is the single source of truth for the data exchanged between
//! the lexicon, agent, graph, and environment crates.
//!
//! # Modules
//!
//! - [`ids`] -- Typed node identifiers
//! - [`enums`] -- Action and strategy enumerations
//! - [`structs`] -- Letter inventories, node data, audit records, snapshots

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActionKind, Strategy};
pub use ids::NodeId;
pub use structs::{
    ActionRecord, FormedWord, LetterInventory, NodeAttributes, NodeData, WorldSnapshot,
};
