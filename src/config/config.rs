//! Main configuration structure and implementation

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{EmitConfig, TargetConfig};
use crate::{ImplyError, ImplyResult};

/// Configuration file version understood by this build
pub const CONFIG_VERSION: &str = "1.0";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// What to generate
    #[serde(default)]
    pub target: TargetConfig,

    /// How to write it
    #[serde(default)]
    pub emit: EmitConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> ImplyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ImplyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> ImplyResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| ImplyError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> ImplyResult<()> {
        if self.version != CONFIG_VERSION {
            return Err(ImplyError::Config(format!(
                "Unsupported configuration version: {}",
                self.version
            )));
        }

        self.target.validate()?;
        self.emit
            .validate()
            .map_err(|e| ImplyError::Config(e.to_string()))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            target: TargetConfig::default(),
            emit: EmitConfig::default(),
        }
    }
}
