use crate::config::{CliConfig, DEFAULT_GCLOUD_BIN, DEFAULT_OUTPUT_PATH};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional TOML file for the ambient settings. Positional arguments
/// (project, instance, zone) never come from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub compute: Option<ComputeConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComputeConfig {
    pub gcloud_bin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl CliConfig {
    /// Overlays file values onto flags that are still at their defaults, so
    /// explicit command-line flags always win.
    pub fn with_file_overlay(mut self) -> Result<Self> {
        let Some(path) = self.config.clone() else {
            return Ok(self);
        };

        tracing::debug!("Loading config file {}", path);
        let file = TomlConfig::from_file(&path)?;

        if self.output_path == DEFAULT_OUTPUT_PATH {
            if let Some(path) = file.output.and_then(|o| o.path) {
                self.output_path = path;
            }
        }
        if self.gcloud_bin == DEFAULT_GCLOUD_BIN {
            if let Some(binary) = file.compute.and_then(|c| c.gcloud_bin) {
                self.gcloud_bin = binary;
            }
        }
        if !self.monitor {
            if let Some(enabled) = file.monitoring.and_then(|m| m.enabled) {
                self.monitor = enabled;
            }
        }

        Ok(self)
    }
}
