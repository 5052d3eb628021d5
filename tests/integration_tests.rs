#![cfg(unix)]

use gce_backup_report::{
    BackupReportPipeline, CliConfig, GcloudCompute, LocalStorage, ReportEngine,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

const INSTANCE_JSON: &str = r#"{
  "name": "web-1",
  "status": "RUNNING",
  "cpuPlatform": "Intel Broadwell",
  "machineType": "https://www.googleapis.com/compute/v1/projects/my-proj/zones/us-central1-a/machineTypes/e2-medium",
  "disks": [
    {
      "boot": true,
      "deviceName": "persistent-disk-0",
      "source": "https://www.googleapis.com/compute/v1/projects/my-proj/zones/us-central1-a/disks/web-1"
    },
    {
      "boot": false,
      "deviceName": "data",
      "source": "https://www.googleapis.com/compute/v1/projects/my-proj/regions/us-central1/disks/web-1-data"
    }
  ],
  "networkInterfaces": [
    {
      "network": "https://www.googleapis.com/compute/v1/projects/my-proj/global/networks/default",
      "subnetwork": "https://www.googleapis.com/compute/v1/projects/my-proj/regions/us-central1/subnetworks/default",
      "networkIP": "10.128.0.2",
      "accessConfigs": [{"natIP": "34.68.1.10"}]
    }
  ],
  "serviceAccounts": [{"email": "1234-compute@developer.gserviceaccount.com"}],
  "tags": {"items": ["http-server"]}
}"#;

const MACHINE_TYPE_JSON: &str = r#"{
  "name": "e2-medium",
  "guestCpus": 2,
  "memoryMb": 4096,
  "description": "Efficient Instance, 2 vCPUs, 4 GB RAM"
}"#;

const BOOT_DISK_JSON: &str = r#"{
  "name": "web-1",
  "sizeGb": "100",
  "type": "https://www.googleapis.com/compute/v1/projects/my-proj/zones/us-central1-a/diskTypes/pd-balanced"
}"#;

const DATA_DISK_JSON: &str = r#"{
  "name": "web-1-data",
  "sizeGb": "500",
  "type": "https://www.googleapis.com/compute/v1/projects/my-proj/regions/us-central1/diskTypes/pd-ssd"
}"#;

/// Drops a fake `gcloud` shell script into `dir` that answers describe calls
/// with canned JSON. `fail_data_disk` makes the regional disk describe fail
/// the way a deleted disk would.
fn write_fake_gcloud(dir: &TempDir, fail_data_disk: bool) -> PathBuf {
    let data_disk_case = if fail_data_disk {
        r#"echo "ERROR: (gcloud.compute.disks.describe) Could not fetch resource" >&2; exit 1"#.to_string()
    } else {
        format!("cat <<'EOF'\n{}\nEOF", DATA_DISK_JSON)
    };

    let script = format!(
        r#"#!/bin/sh
case "$*" in
  --version*) echo "Google Cloud SDK 480.0.0" ;;
  "compute instances describe"*) cat <<'EOF'
{instance}
EOF
;;
  "compute machine-types describe"*) cat <<'EOF'
{machine_type}
EOF
;;
  "compute disks describe web-1-data"*) {data_disk_case}
;;
  "compute disks describe web-1"*) cat <<'EOF'
{boot_disk}
EOF
;;
  *) echo "unexpected invocation: $*" >&2; exit 64 ;;
esac
"#,
        instance = INSTANCE_JSON,
        machine_type = MACHINE_TYPE_JSON,
        boot_disk = BOOT_DISK_JSON,
        data_disk_case = data_disk_case,
    );

    let path = dir.path().join("gcloud");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn config_for(gcloud_bin: &str, output_path: &str) -> CliConfig {
    CliConfig {
        project: "my-proj".to_string(),
        instance: "web-1".to_string(),
        zone: "us-central1-a".to_string(),
        output_path: output_path.to_string(),
        gcloud_bin: gcloud_bin.to_string(),
        verbose: false,
        monitor: false,
        config: None,
    }
}

#[tokio::test]
async fn test_end_to_end_report_with_fake_gcloud() {
    let bin_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let gcloud = write_fake_gcloud(&bin_dir, false);
    let output_path = out_dir.path().to_str().unwrap().to_string();

    let api = GcloudCompute::new(gcloud.to_str().unwrap());
    api.check_available().await.unwrap();

    let config = config_for(gcloud.to_str().unwrap(), &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = BackupReportPipeline::new(storage, config, api);
    let engine = ReportEngine::new(pipeline);

    let report_path = engine.run().await.unwrap();

    assert!(report_path.contains("web-1_backup_report_"));
    assert!(report_path.ends_with(".txt"));

    let entries: Vec<_> = fs::read_dir(out_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let body = fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();

    assert!(body.contains("VM BACKUP REPORT"));
    assert!(body.contains("Machine type : e2-medium"));
    assert!(body.contains("Memory       : 4096 MB"));
    assert!(body.contains("External IP : 34.68.1.10"));
    assert!(body.contains("Service account : 1234-compute@developer.gserviceaccount.com"));

    // Both disk topologies appear with the right scope flags.
    assert!(body.contains("Scope  : zonal (us-central1-a)"));
    assert!(body.contains("Scope  : regional (us-central1)"));
    assert!(body.contains("--source-disk-zone=us-central1-a --storage-location=us-central1"));
    assert!(body.contains("--source-disk-region=us-central1 --storage-location=us-central1"));
    assert!(body.contains("--replica-zones=us-central1-a,us-central1-b"));
    assert!(body.contains("--type=pd-ssd --size=500GB"));
}

#[tokio::test]
async fn test_failed_disk_describe_still_produces_report() {
    let bin_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let gcloud = write_fake_gcloud(&bin_dir, true);
    let output_path = out_dir.path().to_str().unwrap().to_string();

    let api = GcloudCompute::new(gcloud.to_str().unwrap());
    let config = config_for(gcloud.to_str().unwrap(), &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = BackupReportPipeline::new(storage, config, api);
    let engine = ReportEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let entries: Vec<_> = fs::read_dir(out_dir.path()).unwrap().collect();
    let body = fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();

    // The broken disk is reported with unknown fields instead of aborting.
    assert!(body.contains("* web-1-data (data)"));
    assert!(body.contains("Size   : unknown"));
    assert!(body.contains("Type   : unknown"));
    // The healthy boot disk is fully reported.
    assert!(body.contains("--type=pd-balanced --size=100GB"));
}

#[tokio::test]
async fn test_missing_gcloud_binary_is_fatal() {
    let api = GcloudCompute::new("/nonexistent/gcloud");

    let err = api.check_available().await.unwrap_err();
    assert!(err.user_friendly_message().contains("not found"));
    assert!(err.recovery_suggestion().contains("cloud.google.com/sdk"));
}

#[tokio::test]
async fn test_instance_describe_failure_aborts_run() {
    let bin_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    // A gcloud that fails every compute call.
    let path = bin_dir.path().join("gcloud");
    fs::write(
        &path,
        "#!/bin/sh\necho \"ERROR: not authenticated\" >&2\nexit 1\n",
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    let output_path = out_dir.path().to_str().unwrap().to_string();
    let api = GcloudCompute::new(path.to_str().unwrap());
    let config = config_for(path.to_str().unwrap(), &output_path);
    let storage = LocalStorage::new(output_path);
    let pipeline = BackupReportPipeline::new(storage, config, api);
    let engine = ReportEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_err());

    // No report file gets written on a hard failure.
    assert_eq!(fs::read_dir(out_dir.path()).unwrap().count(), 0);
}
