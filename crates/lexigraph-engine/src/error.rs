//! Error types for the `lexigraph` binary.
//!
//! [`EngineError`] wraps every failure mode of a run so that `main` can
//! propagate with `?` and exit non-zero.

/// Top-level error for the `lexigraph` binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: lexigraph_core::config::ConfigError,
    },

    /// Corpus or alphabet loading failed.
    #[error("lexicon error: {source}")]
    Lexicon {
        /// The underlying lexicon error.
        #[from]
        source: lexigraph_lexicon::LexiconError,
    },

    /// Graph generation failed.
    #[error("graph error: {source}")]
    Graph {
        /// The underlying graph error.
        #[from]
        source: lexigraph_graph::GraphError,
    },

    /// Game setup or the round loop failed.
    #[error("environment error: {source}")]
    Environment {
        /// The underlying environment error.
        #[from]
        source: lexigraph_core::environment::EnvironmentError,
    },

    /// Writing the audit log failed.
    #[error("export error: {source}")]
    Export {
        /// The underlying export error.
        #[from]
        source: lexigraph_core::export::ExportError,
    },
}
