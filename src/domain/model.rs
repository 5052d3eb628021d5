use serde::{Deserialize, Serialize};

/// Scope of a disk resource, derived from its source path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskScope {
    Zonal { zone: String },
    Regional { region: String },
}

impl DiskScope {
    /// The zone or region the disk lives in.
    pub fn location(&self) -> &str {
        match self {
            DiskScope::Zonal { zone } => zone,
            DiskScope::Regional { region } => region,
        }
    }

    /// Where snapshots of this disk are stored: the region itself for a
    /// regional disk, the zone minus its trailing `-<letter>` suffix for a
    /// zonal one (us-central1-a -> us-central1).
    pub fn storage_location(&self) -> String {
        match self {
            DiskScope::Regional { region } => region.clone(),
            DiskScope::Zonal { zone } => match zone.rsplit_once('-') {
                Some((region, _suffix)) => region.to_string(),
                None => zone.clone(),
            },
        }
    }

    pub fn is_regional(&self) -> bool {
        matches!(self, DiskScope::Regional { .. })
    }
}

/// One attached disk as seen on the instance, plus the result of its own
/// describe call. `detail` is None when that call failed.
#[derive(Debug, Clone)]
pub struct DiskDescribe {
    pub source: String,
    pub boot: bool,
    pub device_name: Option<String>,
    pub detail: Option<serde_json::Value>,
}

/// Raw describe payloads collected during the gather stage.
#[derive(Debug, Clone)]
pub struct InstanceSnapshot {
    pub instance: serde_json::Value,
    pub machine_type: Option<serde_json::Value>,
    pub disks: Vec<DiskDescribe>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineTypeSpec {
    pub name: String,
    pub guest_cpus: Option<i64>,
    pub memory_mb: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub network: Option<String>,
    pub subnetwork: Option<String>,
    pub internal_ip: Option<String>,
    pub external_ip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub name: String,
    pub status: Option<String>,
    pub cpu_platform: Option<String>,
    pub machine: MachineTypeSpec,
    pub network: NetworkSummary,
    pub service_account: Option<String>,
    pub tags: Vec<String>,
}

/// Extracted per-disk facts. Size and type stay None when the disk's
/// describe call failed; the report shows them as "unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskRecord {
    pub name: String,
    pub scope: DiskScope,
    pub boot: bool,
    pub device_name: Option<String>,
    pub size_gb: Option<String>,
    pub disk_type: Option<String>,
}

/// The four ready-to-run backup commands for a single disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupCommandSet {
    pub snapshot: String,
    pub image_from_snapshot: String,
    pub disk_from_image: String,
    pub disk_from_snapshot: String,
}

/// Rendered report, ready to be written to storage.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub filename: String,
    pub body: String,
}
