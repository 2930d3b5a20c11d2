//! Application configuration.
//!
//! Values come from a TOML file with serde defaults for anything missing,
//! then CLI flags override them.

use crossmark_engine::{Players, RoundPolicy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when no path is given and it exists.
pub const DEFAULT_CONFIG_PATH: &str = "crossmark.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "CROSSMARK_CONFIG";

/// Settings for a crossmark run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name for X.
    player_x: String,

    /// Display name for O.
    player_o: String,

    /// How rounds are counted toward a tie.
    round_policy: RoundPolicy,

    /// Log file used while the terminal UI owns the screen.
    log_file: PathBuf,

    /// Default filter when `RUST_LOG` is unset.
    log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let players = Players::default();
        Self {
            player_x: players.name(crossmark_engine::Player::X).to_string(),
            player_o: players.name(crossmark_engine::Player::O).to_string(),
            round_policy: RoundPolicy::default(),
            log_file: PathBuf::from("crossmark.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.player_x.trim().is_empty() || config.player_o.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path, or one named by `CROSSMARK_CONFIG`, must exist.
    /// Otherwise `crossmark.toml` is read if present, else defaults apply.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
            let config = Self::from_file(&path)?;
            info!(path = %path.display(), "Config loaded");
            return Ok(config);
        }

        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        if fallback.exists() {
            let config = Self::from_file(fallback)?;
            info!(path = DEFAULT_CONFIG_PATH, "Config loaded");
            return Ok(config);
        }

        debug!("No config file, using defaults");
        Ok(Self::default())
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        legacy_rounds: bool,
    ) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        if legacy_rounds {
            self.round_policy = RoundPolicy::Legacy;
        }
        self
    }

    /// Player roster for a new session.
    pub fn players(&self) -> Players {
        Players::new(&self.player_x, &self.player_o)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
