//! CLI configuration

use serde::Deserialize;

use crate::OutputFormat;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Output format used when `--format` is not given
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `LEASE_` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("output_format", "text")?
            .add_source(config::Environment::with_prefix("LEASE"))
            .build()?
            .try_deserialize()
    }
}
