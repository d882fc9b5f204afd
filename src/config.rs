use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::matcher::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOP_LIMIT};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_max_payload_bytes() -> usize { 8 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_max_grants")]
    pub max_grants: usize,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_grants: default_max_grants(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_limit() -> usize { DEFAULT_TOP_LIMIT }
fn default_max_limit() -> usize { 100 }
fn default_max_grants() -> usize { 10_000 }
fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_org_type_weight")]
    pub org_type: f64,
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_amount_weight")]
    pub amount: f64,
    #[serde(default = "default_keywords_weight")]
    pub keywords: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            org_type: default_org_type_weight(),
            category: default_category_weight(),
            amount: default_amount_weight(),
            keywords: default_keywords_weight(),
        }
    }
}

fn default_location_weight() -> f64 { 0.20 }
fn default_org_type_weight() -> f64 { 0.25 }
fn default_category_weight() -> f64 { 0.20 }
fn default_amount_weight() -> f64 { 0.15 }
fn default_keywords_weight() -> f64 { 0.20 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            location: config.location,
            org_type: config.org_type,
            category: config.category,
            amount: config.amount,
            keywords: config.keywords,
        }
    }
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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GRANTMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GRANTMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    ///
    /// The file replaces `config/default` and `config/local`; environment
    /// variables still override it.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Scoring weights as used by the matcher
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.weights();
        let all = [
            weights.location,
            weights.org_type,
            weights.category,
            weights.amount,
            weights.keywords,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Message(
                "scoring weights must be finite and non-negative".to_string(),
            ));
        }
        if (weights.total() - 1.0).abs() > 0.001 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 1.0, got {:.3}",
                weights.total()
            )));
        }
        if self.matching.default_limit == 0 || self.matching.max_limit == 0 {
            return Err(ConfigError::Message(
                "matching limits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("GRANTMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
