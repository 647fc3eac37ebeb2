//! Configuration for the word engine and the workbook file.
//!
//! Stored as JSON in the platform config directory:
//! - Linux: `~/.config/dutch-learner/config.json`
//! - macOS: `~/Library/Application Support/dutch-learner/config.json`
//! - Windows: `%APPDATA%\dutch-learner\config.json`

use crate::core::tokenizer::DEFAULT_MIN_TOKEN_CHARS;
use crate::core::ranker::DEFAULT_MIN_FREQUENCY;
use crate::core::types::{DifficultyThresholds, MatchMode};
use crate::error::Error;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_NAME: &str = "dutch-learner";

/// Settings that change how text is tokenized, classified and ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether the membership set holds known or still-unknown words.
    #[serde(default)]
    pub mode: MatchMode,
    /// Raised to 2 when lower.
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
    #[serde(default = "default_suggestion_min_frequency")]
    pub suggestion_min_frequency: u64,
    #[serde(default)]
    pub difficulty: DifficultyThresholds,
}

fn default_min_token_chars() -> usize {
    DEFAULT_MIN_TOKEN_CHARS
}

fn default_suggestion_min_frequency() -> u64 {
    DEFAULT_MIN_FREQUENCY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            min_token_chars: default_min_token_chars(),
            suggestion_min_frequency: default_suggestion_min_frequency(),
            difficulty: DifficultyThresholds::default(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    /// Workbook file. If None, the platform data directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Config {
    /// Configured workbook path, falling back to the platform default.
    pub fn workbook_path(&self) -> Result<PathBuf, Error> {
        match &self.store_path {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => default_workbook_path(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, Error> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))
}

pub fn default_config_path() -> Result<PathBuf, Error> {
    Ok(project_dirs()?.config_dir().join("config.json"))
}

pub fn default_workbook_path() -> Result<PathBuf, Error> {
    Ok(project_dirs()?.data_local_dir().join("workbook.bin"))
}

/// Load configuration from `path`.
/// Returns the default config if the file doesn't exist or is invalid.
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!(?path, "no config file found, using defaults");
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Config>(&contents) {
            Ok(config) => {
                info!(?path, "loaded config");
                config
            }
            Err(e) => {
                warn!(?path, error = %e, "failed to parse config file, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            warn!(?path, error = %e, "failed to read config file, using defaults");
            Config::default()
        }
    }
}

/// Save configuration to `path`, creating the parent directory if needed.
pub fn save_config(config: &Config, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!(?path, "saved config");
    Ok(())
}
