use serde::{Deserialize, Serialize};
use std::path::Path;

use super::dataset::DatasetConfig;
use super::errors::ConfigError;
use super::generator::GeneratorConfig;
use super::logging::LoggingConfig;

pub const DEFAULT_CONFIG_FILE: &str = "oui-data.toml";

/// Main configuration structure for the oui-data tool
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Where the runtime reads the dataset from
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Offline dataset generation
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. oui-data.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.resource_dir {
            self.dataset.resource_dir = Some(dir);
        }
        if let Some(url) = overrides.feed_url {
            self.generator.feed_url = url;
        }
        if let Some(output) = overrides.output_path {
            self.generator.output_path = output;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.feed_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "generator.feed_url cannot be empty".to_string(),
            ));
        }

        if !self.generator.feed_url.starts_with("http://")
            && !self.generator.feed_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "generator.feed_url must start with http:// or https://, got {}",
                self.generator.feed_url
            )));
        }

        if self.generator.output_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "generator.output_path cannot be empty".to_string(),
            ));
        }

        if self.generator.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "generator.timeout_secs cannot be 0".to_string(),
            ));
        }

        if let Some(dir) = &self.dataset.resource_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "dataset.resource_dir cannot be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resource_dir: Option<String>,
    pub feed_url: Option<String>,
    pub output_path: Option<String>,
    pub log_level: Option<String>,
}
