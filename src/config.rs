use crate::eval::EvalOptions;
use crate::metrics::{MetricKind, ALL_ITEMS};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "RANKMETRICS_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// File the configuration was read from; `None` when defaults were used.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Report and logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Skip queries without ground-truth positives (their scores are undefined).
    #[serde(default = "default_skip_without_positives")]
    pub skip_without_positives: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            skip_without_positives: default_skip_without_positives(),
        }
    }
}

/// Which metrics to compute and at which depths
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: Vec<MetricKind>,
    /// Depths for the top-K metrics; `-1` means the whole ranking.
    #[serde(default = "default_k")]
    pub k: Vec<i32>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            k: default_k(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_skip_without_positives() -> bool {
    true
}

fn default_enabled() -> Vec<MetricKind> {
    MetricKind::ALL.to_vec()
}

fn default_k() -> Vec<i32> {
    vec![ALL_ITEMS]
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in RANKMETRICS_CONFIG environment variable
    /// 2. ./rankmetrics.toml in current directory
    ///
    /// A missing default file yields the default configuration; a missing file named by
    /// RANKMETRICS_CONFIG is an error.
    pub fn load() -> Result<Self> {
        // Optional file
        let _ = dotenv::dotenv();

        let (config_path, explicit) = match std::env::var(CONFIG_ENV) {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from("rankmetrics.toml"), false),
        };

        if !explicit && !config_path.exists() {
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.source = Some(config_path);

        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.metrics.enabled.is_empty() {
            anyhow::bail!("metrics.enabled must name at least one metric");
        }

        let needs_k = self.metrics.enabled.iter().any(|kind| kind.uses_k());
        if needs_k && self.metrics.k.is_empty() {
            anyhow::bail!("metrics.k must list at least one depth (use -1 for the whole ranking)");
        }

        Ok(())
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            skip_without_positives: self.report.skip_without_positives,
        }
    }
}
