//! Error types for the `lexigraph-lexicon` crate.

use std::path::PathBuf;

/// Errors that can occur while loading a corpus or an alphabet.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A word list or alphabet file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An alphabet entry was not exactly one character.
    #[error("alphabet entry {token:?} is not a single character")]
    InvalidSymbol {
        /// The offending token.
        token: String,
    },

    /// A list that must not be empty had no entries.
    #[error("{what} is empty")]
    Empty {
        /// Which list was empty (`corpus` or `alphabet`).
        what: &'static str,
    },
}
