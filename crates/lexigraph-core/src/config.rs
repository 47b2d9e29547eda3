//! Configuration loading and typed config structures for the Lexigraph
//! simulation.
//!
//! The configuration lives in `lexigraph-config.yaml` next to the binary's
//! working directory. Every field has a default, so a missing file or a
//! partial file is fine. Graph shape parameters are not here: they come
//! from the command line.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that overrides `game.seed`.
pub const SEED_ENV_VAR: &str = "LEXIGRAPH_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidOverride {
        /// The environment variable.
        var: &'static str,
        /// Its raw value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Game rules: seed, tick limit, hand size.
    #[serde(default)]
    pub game: GameConfig,

    /// Corpus and alphabet locations.
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Graph generator settings.
    #[serde(default)]
    pub graph: GraphConfig,

    /// Audit-log export settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] for a malformed override.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Same as [`SimulationConfig::from_file`], minus I/O.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.game.apply_env_overrides()?;
        Ok(config)
    }
}

/// Game rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Random seed for hands, action draws, and the graph.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Clock bound: no action runs once the clock reaches it.
    #[serde(default = "default_tick_limit")]
    pub tick_limit: u64,

    /// Letters dealt to each agent at game start.
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tick_limit: default_tick_limit(),
            hand_size: default_hand_size(),
        }
    }
}

impl GameConfig {
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_seed_override(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    /// Replace the seed with `raw`, if present. Surrounding whitespace is
    /// ignored.
    fn apply_seed_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = raw {
            self.seed = raw.trim().parse().map_err(|_err| ConfigError::InvalidOverride {
                var: SEED_ENV_VAR,
                value: raw.to_owned(),
            })?;
        }
        Ok(())
    }
}

/// Corpus and alphabet locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconConfig {
    /// Fixed-length word list.
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,

    /// Alphabet file.
    #[serde(default = "default_alphabet_path")]
    pub alphabet_path: PathBuf,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            alphabet_path: default_alphabet_path(),
        }
    }
}

/// Graph generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphConfig {
    /// How many random graphs to draw before giving up on connectivity.
    #[serde(default = "default_max_connect_attempts")]
    pub max_connect_attempts: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_connect_attempts: default_max_connect_attempts(),
        }
    }
}

/// Audit-log export settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
    /// Whether to write the CSV at the end of a run.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory the CSV is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: `text` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

const fn default_seed() -> u64 {
    1
}

const fn default_tick_limit() -> u64 {
    400
}

const fn default_hand_size() -> usize {
    5
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data/five_letter_words.txt")
}

fn default_alphabet_path() -> PathBuf {
    PathBuf::from("data/alphabet_english.txt")
}

const fn default_max_connect_attempts() -> u32 {
    1000
}

const fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_format() -> String {
    String::from("text")
}
