use crate::domain::model::DiskScope;
use crate::domain::ports::ComputeApi;
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// `ComputeApi` backed by the pre-authenticated `gcloud` CLI. Every call is
/// a read-only `describe` with `--format=json`; stdout is parsed in-process.
#[derive(Debug, Clone)]
pub struct GcloudCompute {
    binary: String,
}

impl GcloudCompute {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Fails fast when the compute CLI is missing from the machine.
    pub async fn check_available(&self) -> Result<()> {
        match Command::new(&self.binary).arg("--version").output().await {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(ReportError::CliUnavailable {
                binary: self.binary.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
            Err(e) => Err(ReportError::CliUnavailable {
                binary: self.binary.clone(),
                reason: e.to_string(),
            }),
        }
    }

    async fn run_json(&self, args: &[String]) -> Result<serde_json::Value> {
        let command_line = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!("Running: {}", command_line);

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ReportError::CliUnavailable {
                        binary: self.binary.clone(),
                        reason: e.to_string(),
                    }
                } else {
                    ReportError::IoError(e)
                }
            })?;

        if !output.status.success() {
            return Err(ReportError::CliCommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| ReportError::MalformedResponse {
            resource: command_line,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ComputeApi for GcloudCompute {
    async fn describe_instance(
        &self,
        project: &str,
        instance: &str,
        zone: &str,
    ) -> Result<serde_json::Value> {
        self.run_json(&[
            "compute".to_string(),
            "instances".to_string(),
            "describe".to_string(),
            instance.to_string(),
            format!("--project={}", project),
            format!("--zone={}", zone),
            "--format=json".to_string(),
        ])
        .await
    }

    async fn describe_machine_type(
        &self,
        project: &str,
        zone: &str,
        machine_type: &str,
    ) -> Result<serde_json::Value> {
        self.run_json(&[
            "compute".to_string(),
            "machine-types".to_string(),
            "describe".to_string(),
            machine_type.to_string(),
            format!("--project={}", project),
            format!("--zone={}", zone),
            "--format=json".to_string(),
        ])
        .await
    }

    async fn describe_disk(
        &self,
        project: &str,
        name: &str,
        scope: &DiskScope,
    ) -> Result<serde_json::Value> {
        let scope_flag = match scope {
            DiskScope::Zonal { zone } => format!("--zone={}", zone),
            DiskScope::Regional { region } => format!("--region={}", region),
        };

        self.run_json(&[
            "compute".to_string(),
            "disks".to_string(),
            "describe".to_string(),
            name.to_string(),
            format!("--project={}", project),
            scope_flag,
            "--format=json".to_string(),
        ])
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_available_reports_missing_binary() {
        let api = GcloudCompute::new("definitely-not-a-real-binary-xyz");

        let result = api.check_available().await;

        assert!(matches!(
            result,
            Err(ReportError::CliUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_describe_instance_surfaces_missing_binary() {
        let api = GcloudCompute::new("definitely-not-a-real-binary-xyz");

        let result = api
            .describe_instance("my-proj", "web-1", "us-central1-a")
            .await;

        assert!(matches!(
            result,
            Err(ReportError::CliUnavailable { .. })
        ));
    }
}
