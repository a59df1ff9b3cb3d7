//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{HunkstatError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HunkstatError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HunkstatError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        log::debug!("loaded config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse config from a YAML string. An empty string yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| HunkstatError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            HunkstatError::OutputError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `max_input_bytes` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(HunkstatError::UserError(
                "config validation failed: max_input_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
