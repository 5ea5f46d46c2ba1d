use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringParams;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_occupation_boost")]
    pub occupation_boost: u8,
    #[serde(default = "default_score_threshold")]
    pub score_threshold: u8,
    #[serde(default = "default_fallback_score")]
    pub fallback_score: u8,
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

impl ScoringSettings {
    pub fn params(&self) -> ScoringParams {
        ScoringParams {
            occupation_boost: self.occupation_boost,
            score_threshold: self.score_threshold,
            fallback_score: self.fallback_score,
            max_tags: self.max_tags,
        }
    }
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            occupation_boost: default_occupation_boost(),
            score_threshold: default_score_threshold(),
            fallback_score: default_fallback_score(),
            max_tags: default_max_tags(),
        }
    }
}

fn default_occupation_boost() -> u8 {
    20
}
fn default_score_threshold() -> u8 {
    10
}
fn default_fallback_score() -> u8 {
    50
}
fn default_max_tags() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with FINPATH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FINPATH_)
            // e.g., FINPATH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FINPATH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FINPATH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
