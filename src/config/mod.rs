pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_GCLOUD_BIN: &str = "gcloud";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "gce-backup-report"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Generate a metadata report and ready-to-run backup commands for a GCE VM")
)]
pub struct CliConfig {
    /// Cloud project the instance belongs to
    pub project: String,

    /// Name of the VM instance
    pub instance: String,

    /// Zone the instance runs in, e.g. us-central1-a
    pub zone: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_OUTPUT_PATH))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_GCLOUD_BIN))]
    pub gcloud_bin: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Log process CPU/memory usage during the run")
    )]
    pub monitor: bool,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "TOML file supplying ambient settings")
    )]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn project(&self) -> &str {
        &self.project
    }

    fn instance(&self) -> &str {
        &self.instance
    }

    fn zone(&self) -> &str {
        &self.zone
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn gcloud_bin(&self) -> &str {
        &self.gcloud_bin
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_resource_name("project", &self.project)?;
        validation::validate_resource_name("instance", &self.instance)?;
        validation::validate_zone("zone", &self.zone)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("gcloud_bin", &self.gcloud_bin)?;
        Ok(())
    }
}
