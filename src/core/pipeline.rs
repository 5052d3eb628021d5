use crate::core::classify::classify_disk_source;
use crate::core::commands::synthesize;
use crate::core::extract::{extract_summary, machine_type_name};
use crate::core::render::render_report;
use crate::domain::model::{DiskDescribe, DiskRecord, InstanceSnapshot, ReportDocument};
use crate::domain::ports::{ComputeApi, ConfigProvider, ReportPipeline, Storage};
use crate::utils::error::Result;
use chrono::Local;

pub struct BackupReportPipeline<S: Storage, C: ConfigProvider, A: ComputeApi> {
    storage: S,
    config: C,
    api: A,
}

impl<S: Storage, C: ConfigProvider, A: ComputeApi> BackupReportPipeline<S, C, A> {
    pub fn new(storage: S, config: C, api: A) -> Self {
        Self {
            storage,
            config,
            api,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, A: ComputeApi> ReportPipeline
    for BackupReportPipeline<S, C, A>
{
    async fn gather(&self) -> Result<InstanceSnapshot> {
        let project = self.config.project();
        let zone = self.config.zone();

        tracing::debug!("Describing instance {}", self.config.instance());
        let instance = self
            .api
            .describe_instance(project, self.config.instance(), zone)
            .await?;

        let machine_type = match machine_type_name(&instance) {
            Some(name) => {
                tracing::debug!("Describing machine type {}", name);
                Some(self.api.describe_machine_type(project, zone, &name).await?)
            }
            None => {
                tracing::warn!("⚠️ Instance payload has no machineType field");
                None
            }
        };

        let mut disks = Vec::new();
        let attached = instance
            .get("disks")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        for entry in attached {
            let Some(source) = entry.get("source").and_then(|v| v.as_str()) else {
                // Local SSDs and other scratch disks carry no source resource.
                tracing::warn!("⚠️ Skipping attached disk without a source path");
                continue;
            };

            let classified = classify_disk_source(source)?;

            // A failed describe is recorded, not fatal: the report still gets
            // an entry with unknown size/type.
            let detail = match self
                .api
                .describe_disk(project, &classified.name, &classified.scope)
                .await
            {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Could not describe disk {}: {}; reporting unknown size/type",
                        classified.name,
                        e
                    );
                    None
                }
            };

            disks.push(DiskDescribe {
                source: source.to_string(),
                boot: entry.get("boot").and_then(|v| v.as_bool()).unwrap_or(false),
                device_name: entry
                    .get("deviceName")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                detail,
            });
        }

        Ok(InstanceSnapshot {
            instance,
            machine_type,
            disks,
        })
    }

    async fn compose(&self, snapshot: InstanceSnapshot) -> Result<ReportDocument> {
        let now = Local::now();
        let date_stamp = now.format("%Y-%m-%d").to_string();
        let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();

        let summary = extract_summary(
            &snapshot.instance,
            snapshot.machine_type.as_ref(),
            self.config.instance(),
        );

        let mut disks = Vec::new();
        for disk in &snapshot.disks {
            let classified = classify_disk_source(&disk.source)?;

            let record = DiskRecord {
                name: classified.name,
                scope: classified.scope,
                boot: disk.boot,
                device_name: disk.device_name.clone(),
                size_gb: disk
                    .detail
                    .as_ref()
                    .and_then(|d| d.get("sizeGb"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                disk_type: disk
                    .detail
                    .as_ref()
                    .and_then(|d| d.get("type"))
                    .and_then(|v| v.as_str())
                    .map(|t| crate::core::extract::resource_basename(t).to_string()),
            };

            let commands = synthesize(self.config.project(), &record, &date_stamp);
            disks.push((record, commands));
        }

        let body = render_report(
            self.config.project(),
            self.config.zone(),
            &summary,
            &disks,
            &generated_at,
        );

        Ok(ReportDocument {
            filename: format!("{}_backup_report_{}.txt", self.config.instance(), date_stamp),
            body,
        })
    }

    async fn publish(&self, document: ReportDocument) -> Result<String> {
        tracing::debug!(
            "Writing report ({} bytes) to {}",
            document.body.len(),
            document.filename
        );
        self.storage
            .write_file(&document.filename, document.body.as_bytes())
            .await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            document.filename
        ))
    }
}
