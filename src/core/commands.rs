use crate::domain::model::{BackupCommandSet, DiskRecord, DiskScope};

/// Synthesizes the four backup commands for one disk. Pure function of the
/// disk record, project, and date stamp; unknown size/type simply drop the
/// corresponding flags so the command still runs with provider defaults.
pub fn synthesize(project: &str, disk: &DiskRecord, date_stamp: &str) -> BackupCommandSet {
    let snapshot_name = format!("{}-snap-{}", disk.name, date_stamp);
    let image_name = format!("{}-image-{}", disk.name, date_stamp);
    let restored_name = format!("{}-restored-{}", disk.name, date_stamp);
    let storage_location = disk.scope.storage_location();

    let source_scope_flag = match &disk.scope {
        DiskScope::Zonal { zone } => format!("--source-disk-zone={}", zone),
        DiskScope::Regional { region } => format!("--source-disk-region={}", region),
    };

    let create_scope_flags = match &disk.scope {
        DiskScope::Zonal { zone } => format!("--zone={}", zone),
        // Regional disks need two replica zones at creation time.
        DiskScope::Regional { region } => format!(
            "--region={} --replica-zones={}-a,{}-b",
            region, region, region
        ),
    };

    let mut shape_flags = String::new();
    if let Some(disk_type) = &disk.disk_type {
        shape_flags.push_str(&format!(" --type={}", disk_type));
    }
    if let Some(size_gb) = &disk.size_gb {
        shape_flags.push_str(&format!(" --size={}GB", size_gb));
    }

    let snapshot = format!(
        "gcloud compute snapshots create {} --project={} --source-disk={} {} --storage-location={}",
        snapshot_name, project, disk.name, source_scope_flag, storage_location
    );

    let image_from_snapshot = format!(
        "gcloud compute images create {} --project={} --source-snapshot={} --storage-location={}",
        image_name, project, snapshot_name, storage_location
    );

    let disk_from_image = format!(
        "gcloud compute disks create {} --project={} {} --image={}{}",
        restored_name, project, create_scope_flags, image_name, shape_flags
    );

    let disk_from_snapshot = format!(
        "gcloud compute disks create {} --project={} {} --source-snapshot={}{}",
        restored_name, project, create_scope_flags, snapshot_name, shape_flags
    );

    BackupCommandSet {
        snapshot,
        image_from_snapshot,
        disk_from_image,
        disk_from_snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zonal_disk() -> DiskRecord {
        DiskRecord {
            name: "web-1".to_string(),
            scope: DiskScope::Zonal {
                zone: "us-central1-a".to_string(),
            },
            boot: true,
            device_name: Some("persistent-disk-0".to_string()),
            size_gb: Some("100".to_string()),
            disk_type: Some("pd-balanced".to_string()),
        }
    }

    #[test]
    fn test_zonal_commands() {
        let commands = synthesize("my-proj", &zonal_disk(), "2026-08-30");

        assert_eq!(
            commands.snapshot,
            "gcloud compute snapshots create web-1-snap-2026-08-30 --project=my-proj \
             --source-disk=web-1 --source-disk-zone=us-central1-a --storage-location=us-central1"
        );
        assert_eq!(
            commands.image_from_snapshot,
            "gcloud compute images create web-1-image-2026-08-30 --project=my-proj \
             --source-snapshot=web-1-snap-2026-08-30 --storage-location=us-central1"
        );
        assert_eq!(
            commands.disk_from_image,
            "gcloud compute disks create web-1-restored-2026-08-30 --project=my-proj \
             --zone=us-central1-a --image=web-1-image-2026-08-30 --type=pd-balanced --size=100GB"
        );
        assert_eq!(
            commands.disk_from_snapshot,
            "gcloud compute disks create web-1-restored-2026-08-30 --project=my-proj \
             --zone=us-central1-a --source-snapshot=web-1-snap-2026-08-30 \
             --type=pd-balanced --size=100GB"
        );
    }

    #[test]
    fn test_regional_commands_use_region_flags() {
        let disk = DiskRecord {
            name: "data".to_string(),
            scope: DiskScope::Regional {
                region: "europe-west4".to_string(),
            },
            boot: false,
            device_name: None,
            size_gb: Some("500".to_string()),
            disk_type: Some("pd-ssd".to_string()),
        };

        let commands = synthesize("my-proj", &disk, "2026-08-30");

        assert!(commands.snapshot.contains("--source-disk-region=europe-west4"));
        assert!(commands.snapshot.contains("--storage-location=europe-west4"));
        assert!(!commands.snapshot.contains("--source-disk-zone"));
        assert!(commands
            .disk_from_image
            .contains("--region=europe-west4 --replica-zones=europe-west4-a,europe-west4-b"));
        assert!(commands.disk_from_snapshot.contains("--region=europe-west4"));
    }

    #[test]
    fn test_unknown_size_and_type_drop_flags() {
        let mut disk = zonal_disk();
        disk.size_gb = None;
        disk.disk_type = None;

        let commands = synthesize("my-proj", &disk, "2026-08-30");

        assert!(!commands.disk_from_image.contains("--size"));
        assert!(!commands.disk_from_image.contains("--type"));
        assert!(!commands.disk_from_snapshot.contains("--size"));
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let disk = zonal_disk();
        let a = synthesize("my-proj", &disk, "2026-08-30");
        let b = synthesize("my-proj", &disk, "2026-08-30");
        assert_eq!(a, b);
    }
}
