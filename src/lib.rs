pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::gcloud::GcloudCompute;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ReportEngine, pipeline::BackupReportPipeline};
pub use utils::error::{ReportError, Result};
