//! `lexigraph` binary: one word-formation game on a random graph.
//!
//! # Run Sequence
//!
//! 1. Parse positional arguments
//! 2. Load configuration from `lexigraph-config.yaml` (defaults if absent)
//! 3. Initialize structured logging (tracing)
//! 4. Draw a connected random graph and label its nodes
//! 5. Load the corpus and alphabet
//! 6. Configure the environment, deal hands, assign targets
//! 7. Play until the clock reaches its bound
//! 8. Log the summary and export the audit log (CSV and JSON)

mod cli;
mod error;

use std::path::Path;

use clap::Parser;
use lexigraph_core::config::{LoggingConfig, SimulationConfig};
use lexigraph_core::environment::Environment;
use lexigraph_core::{export, runner};
use lexigraph_graph::Network;
use lexigraph_lexicon::Lexicon;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::EngineError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any step of the run fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, from_file) = load_config(&cli.config)?;
    init_logging(&config.logging);

    info!("lexigraph starting");
    if from_file {
        info!(path = %cli.config.display(), "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    run(&cli, &config)?;
    Ok(())
}

fn run(cli: &Cli, config: &SimulationConfig) -> Result<(), EngineError> {
    let params = cli.network_params();
    info!(
        num_nodes = params.num_nodes,
        edge_probability = params.edge_probability,
        selfish_fraction = params.selfish_fraction,
        p_star = params.p_star,
        seed = config.game.seed,
        tick_limit = config.game.tick_limit,
        "Run parameters"
    );

    let network = Network::new(params)?;
    let mut rng = StdRng::seed_from_u64(config.game.seed);
    let topology = network.make_random_graph(&mut rng, config.graph.max_connect_attempts)?;
    info!(
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        "Graph generated"
    );

    let lexicon = Lexicon::load(&config.lexicon.corpus_path, &config.lexicon.alphabet_path)?;

    let mut env = Environment::configure(&topology, lexicon, &config.game)?;
    env.set_env()?;
    let summary = env.play()?;
    runner::log_run_end(&summary);

    if config.export.enabled {
        let records = env.audit_log();
        let csv = export::write_csv(&records, &config.export.output_dir, &params)?;
        let json = export::write_json(&records, &config.export.output_dir, &params)?;
        info!(csv = %csv.display(), json = %json.display(), "Export complete");
    } else {
        info!("Export disabled");
    }
    Ok(())
}

/// Load configuration, falling back to defaults when the file is absent.
/// The flag tells whether the file was read.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        Ok((SimulationConfig::from_file(path)?, true))
    } else {
        Ok((SimulationConfig::parse("{}")?, false))
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
