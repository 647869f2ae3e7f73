use crate::grid::ParseError;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// The configuration file read when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("rows and columns must be greater than zero, got {rows}x{columns}")]
    EmptyDimensions { rows: usize, columns: usize },
    #[error("a {rows}x{columns} board is too large")]
    TooLarge { rows: usize, columns: usize },
    #[error("could not parse pattern {path}: {source}")]
    Pattern { path: PathBuf, source: ParseError },
    #[error("pattern is {found_rows}x{found_columns} but the board is {rows}x{columns}")]
    PatternSize {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },
}

/// The simulation settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Config {
    /// The number of rows of the board.
    pub rows: usize,
    /// The number of columns of the board.
    pub columns: usize,
    /// Printed after every cell.
    #[serde(default)]
    pub separator: String,
    /// The symbol for a live cell.
    pub alive: String,
    /// The symbol for a dead cell.
    pub dead: String,
    /// The seed for the random fill. `0` means a seed is derived from the current time.
    #[serde(default)]
    pub seed: i64,
    /// The pause between generations in milliseconds.
    #[serde(default)]
    pub interval: u64,
    /// An optional board file to start from instead of a random fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Using {}", path.display());
        Config::parse(&contents)
    }

    /// Parses the configuration from a JSON string.
    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(contents)?;

        if config.rows == 0 || config.columns == 0 {
            return Err(ConfigError::EmptyDimensions {
                rows: config.rows,
                columns: config.columns,
            });
        }

        if config.rows.checked_mul(config.columns).is_none() {
            return Err(ConfigError::TooLarge {
                rows: config.rows,
                columns: config.columns,
            });
        }

        Ok(config)
    }

    /// Returns the configured seed, or one derived from the current time if none was set.
    pub fn resolve_seed(&self) -> u64 {
        if self.seed != 0 {
            return self.seed as u64;
        }

        info!("Generating random seed");
        // A clock before the epoch still needs some seed
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(1)
    }
}
