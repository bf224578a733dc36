// Configuration loading and parsing (config/dashboard.toml).
//
// Every field has a built-in default, so a missing file or an empty
// file both yield a working configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

/// Assembled configuration, deserialized from `config/dashboard.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[dataset]`: synthetic generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Number of players to generate.
    pub players: usize,
    /// Number of contracts to generate.
    pub contracts: usize,
    /// Number of agents to generate.
    pub agents: usize,
    /// The three draft class years.
    pub draft_years: Vec<u16>,
    /// RNG seed. When omitted, each session gets fresh random data.
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            players: 1000,
            contracts: 100,
            agents: 12,
            draft_years: vec![2025, 2026, 2027],
            seed: None,
        }
    }
}

/// `[scoring]`: questionnaire similarity thresholds.
///
/// Both checks are strict: an agent needs *more than* the configured
/// number of clients for the criterion to count.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum draft-class client count for the volume criterion.
    pub min_draft_class_players: usize,
    /// Minimum same-position draft-class client count.
    pub min_position_players: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            min_draft_class_players: 5,
            min_position_players: 3,
        }
    }
}

/// `[export]`: CSV export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported CSV files, relative to the working directory.
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            dir: "exports".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/dashboard.toml` relative
/// to the given `base_dir`. A missing file yields the defaults.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("dashboard.toml");

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        Config::default()
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        message: e.to_string(),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let dataset = &config.dataset;
    let count_fields: &[(&str, usize)] = &[
        ("dataset.players", dataset.players),
        ("dataset.contracts", dataset.contracts),
        ("dataset.agents", dataset.agents),
    ];
    for (name, val) in count_fields {
        if *val == 0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must be greater than 0".into(),
            });
        }
    }

    if dataset.draft_years.len() != 3 {
        return Err(ConfigError::ValidationError {
            field: "dataset.draft_years".into(),
            message: format!(
                "must list exactly 3 draft class years, got {}",
                dataset.draft_years.len()
            ),
        });
    }

    let mut years = dataset.draft_years.clone();
    years.sort_unstable();
    years.dedup();
    if years.len() != dataset.draft_years.len() {
        return Err(ConfigError::ValidationError {
            field: "dataset.draft_years".into(),
            message: "draft class years must be distinct".into(),
        });
    }

    if config.export.dir.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "export.dir".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
