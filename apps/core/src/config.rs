use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_PIXMAPS_DIR;

const APP_DIR_NAME: &str = "appsview";
const CONFIG_FILE_NAME: &str = "config.toml";
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub screen_width: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub padding: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            tile_width: 96,
            tile_height: 96,
            padding: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skips the theme query when set.
    pub icon_theme: Option<String>,
    pub command_timeout_ms: u64,
    pub pixmaps_dir: PathBuf,
    /// Replaces the built-in descriptor directory list when set.
    pub desktop_dirs: Option<Vec<PathBuf>>,
    pub log_level: String,
    pub grid: GridConfig,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_theme: None,
            command_timeout_ms: 2_000,
            pixmaps_dir: PathBuf::from(DEFAULT_PIXMAPS_DIR),
            desktop_dirs: None,
            log_level: "info".to_string(),
            grid: GridConfig::default(),
            config_path: default_config_path(),
        }
    }
}

impl Config {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

pub fn stable_app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load the config at `path` (or the default location). A missing file yields
/// defaults; a present but broken file is an error.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let mut config = if config_path.exists() {
        let raw = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        toml::from_str::<Config>(&raw).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?
    } else {
        Config::default()
    };

    config.config_path = config_path;
    validate(&config)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    let path = &config.config_path;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    }

    let encoded = toml::to_string_pretty(config)?;
    std::fs::write(path, encoded).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(50..=30_000).contains(&cfg.command_timeout_ms) {
        return Err(ConfigError::Invalid(
            "command_timeout_ms must be between 50 and 30000".into(),
        ));
    }

    if !VALID_LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown log_level '{}'; expected one of {}",
            cfg.log_level,
            VALID_LOG_LEVELS.join(", ")
        )));
    }

    if cfg.icon_theme.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ConfigError::Invalid("icon_theme must not be blank".into()));
    }

    let grid = &cfg.grid;
    if grid.tile_width == 0 || grid.tile_height == 0 {
        return Err(ConfigError::Invalid("grid tile size must be non-zero".into()));
    }
    let padded_tile = grid
        .padding
        .checked_mul(2)
        .and_then(|margins| margins.checked_add(grid.tile_width));
    if !padded_tile.is_some_and(|needed| grid.screen_width >= needed) {
        return Err(ConfigError::Invalid(
            "grid screen_width cannot fit a single padded tile".into(),
        ));
    }

    Ok(())
}
