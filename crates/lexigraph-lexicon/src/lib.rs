//! Word corpus, alphabet, and feasibility queries for the Lexigraph simulation.
//!
//! # Modules
//!
//! - [`corpus`] -- Loading the fixed-length word list and the alphabet ([`Lexicon`])
//! - [`error`] -- Error types for lexicon loading ([`LexiconError`])
//! - [`index`] -- Feasible-word filtering and closest-target selection

pub mod corpus;
pub mod error;
pub mod index;

pub use corpus::{ALPHABET_SIZE, Lexicon};
pub use error::LexiconError;
pub use index::{closest_target, feasible, target_score};
