//!
//! Settings of the SDK: targeted environment, API version and logging.
//!

use std::path::PathBuf;

use serde::Deserialize;

use crate::env::{self, Env};

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "PAYSDK";

/// Directory, relative to the workspace root, holding the settings files.
const CONFIG_DIR: &str = "config";

/// Settings file applied before the environment specific one.
const DEFAULT_CONFIG_FILE: &str = "Default";

/// Settings of the SDK.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// Environment of the payments platform.
    pub environment: Env,
    /// API settings.
    pub api: Api,
    /// Logging settings.
    pub log: Log,
}

/// API version and endpoint.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Api {
    /// Version sent with every request, a release date of the platform API.
    pub version: String,
    /// Base URL of the platform API.
    pub base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            version: "2025-01-23".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Log config settings.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Log {
    /// Logging to a console.
    pub console: LogConsole,
}

/// Logging to a console.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConsole {
    /// Whether you want to see log in your terminal.
    pub enabled: bool,
    /// What you see in your terminal.
    pub level: Level,
    /// Log format
    pub log_format: LogFormat,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level(tracing::Level::INFO),
            log_format: LogFormat::Default,
        }
    }
}

/// Describes the level of verbosity of a span or event.
#[derive(Debug, Clone, Copy)]
pub struct Level(pub(super) tracing::Level);

impl Level {
    /// Returns the most verbose [`tracing::Level`]
    pub fn into_level(self) -> tracing::Level {
        self.0
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::str::FromStr as _;

        let s = String::deserialize(deserializer)?;
        tracing::Level::from_str(&s)
            .map(Level)
            .map_err(serde::de::Error::custom)
    }
}

/// Telemetry / tracing.
#[derive(Default, Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Default pretty log format
    #[default]
    Default,
    /// JSON based structured logging
    Json,
}

impl Config {
    /// Settings for the environment named by `RUN_ENV`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Settings for the environment named by `RUN_ENV`, reading files from `explicit_config_path`
    /// instead of `<workspace>/config` when given.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let environment = env::which();
        let config_dir = Self::config_dir(explicit_config_path);

        let config = config::Config::builder()
            .set_default("environment", environment.to_string())?
            .add_source(
                config::File::from(config_dir.join(format!("{DEFAULT_CONFIG_FILE}.toml")))
                    .required(false),
            )
            .add_source(
                config::File::from(config_dir.join(format!("{environment}.toml")))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Directory holding `Default.toml` and the per environment files.
    pub fn config_dir(explicit_config_path: Option<PathBuf>) -> PathBuf {
        explicit_config_path.unwrap_or_else(|| env::workspace_path().join(CONFIG_DIR))
    }
}
