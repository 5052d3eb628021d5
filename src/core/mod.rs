pub mod classify;
pub mod commands;
pub mod engine;
pub mod extract;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    BackupCommandSet, DiskRecord, DiskScope, InstanceSnapshot, ReportDocument,
};
pub use crate::domain::ports::{ComputeApi, ConfigProvider, ReportPipeline, Storage};
pub use crate::utils::error::Result;
