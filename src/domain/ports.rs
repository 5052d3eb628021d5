use crate::domain::model::{DiskScope, InstanceSnapshot, ReportDocument};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn project(&self) -> &str;
    fn instance(&self) -> &str;
    fn zone(&self) -> &str;
    fn output_path(&self) -> &str;
    fn gcloud_bin(&self) -> &str;
}

/// Read-only describe calls against the compute provider.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    async fn describe_instance(
        &self,
        project: &str,
        instance: &str,
        zone: &str,
    ) -> Result<serde_json::Value>;

    async fn describe_machine_type(
        &self,
        project: &str,
        zone: &str,
        machine_type: &str,
    ) -> Result<serde_json::Value>;

    async fn describe_disk(
        &self,
        project: &str,
        name: &str,
        scope: &DiskScope,
    ) -> Result<serde_json::Value>;
}

#[async_trait]
pub trait ReportPipeline: Send + Sync {
    async fn gather(&self) -> Result<InstanceSnapshot>;
    async fn compose(&self, snapshot: InstanceSnapshot) -> Result<ReportDocument>;
    async fn publish(&self, document: ReportDocument) -> Result<String>;
}
