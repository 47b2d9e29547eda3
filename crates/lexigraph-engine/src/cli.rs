//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use lexigraph_graph::NetworkParams;

/// Run one word-formation game on a random graph.
#[derive(Debug, Parser)]
#[command(name = "lexigraph")]
#[command(author, version, about = "Multi-agent word formation on a random graph")]
pub struct Cli {
    /// Number of nodes (agents)
    pub num_nodes: usize,

    /// Probability of each possible edge
    pub edge_prob: f64,

    /// Probability that a node is selfish
    pub p_selfish: f64,

    /// Sampling density of the action profiles, in [0, 2/7]
    pub p_star: f64,

    /// Configuration file
    #[arg(short, long, default_value = "lexigraph-config.yaml")]
    pub config: PathBuf,
}

impl Cli {
    /// Graph generator parameters from the positional arguments.
    pub const fn network_params(&self) -> NetworkParams {
        NetworkParams {
            num_nodes: self.num_nodes,
            edge_probability: self.edge_prob,
            selfish_fraction: self.p_selfish,
            p_star: self.p_star,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_map_to_params() {
        let cli = Cli::try_parse_from(["lexigraph", "10", "0.3", "0.5", "0.1"]).unwrap();
        let params = cli.network_params();
        assert_eq!(params.num_nodes, 10);
        assert!((params.edge_probability - 0.3).abs() < f64::EPSILON);
        assert!((params.selfish_fraction - 0.5).abs() < f64::EPSILON);
        assert!((params.p_star - 0.1).abs() < f64::EPSILON);
        assert_eq!(cli.config, PathBuf::from("lexigraph-config.yaml"));
    }

    #[test]
    fn missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["lexigraph", "10", "0.3"]).is_err());
    }

    #[test]
    fn non_numeric_node_count_is_rejected() {
        assert!(Cli::try_parse_from(["lexigraph", "ten", "0.3", "0.5", "0.1"]).is_err());
    }
}
