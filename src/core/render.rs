use crate::domain::model::{BackupCommandSet, DiskRecord, InstanceSummary};
use std::fmt::Write;

const RULE: &str = "============================================================";

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

/// Concatenates the extracted metadata and the per-disk command blocks into
/// the final text document.
pub fn render_report(
    project: &str,
    zone: &str,
    summary: &InstanceSummary,
    disks: &[(DiskRecord, BackupCommandSet)],
    generated_at: &str,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, " VM BACKUP REPORT");
    let _ = writeln!(out, " Instance : {}", summary.name);
    let _ = writeln!(out, " Project  : {}", project);
    let _ = writeln!(out, " Zone     : {}", zone);
    let _ = writeln!(out, " Generated: {}", generated_at);
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n--- Instance ---");
    let _ = writeln!(out, "Status       : {}", opt(&summary.status));
    let _ = writeln!(out, "Machine type : {}", summary.machine.name);
    let _ = writeln!(
        out,
        "vCPUs        : {}",
        summary
            .machine
            .guest_cpus
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(
        out,
        "Memory       : {}",
        summary
            .machine
            .memory_mb
            .map(|mb| format!("{} MB", mb))
            .unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(out, "CPU platform : {}", opt(&summary.cpu_platform));
    if let Some(description) = &summary.machine.description {
        let _ = writeln!(out, "Description  : {}", description);
    }

    let _ = writeln!(out, "\n--- Disks ---");
    if disks.is_empty() {
        let _ = writeln!(out, "(no disks attached)");
    }
    for (disk, _) in disks {
        let role = if disk.boot { "boot" } else { "data" };
        let _ = writeln!(out, "* {} ({})", disk.name, role);
        let scope = if disk.scope.is_regional() {
            "regional"
        } else {
            "zonal"
        };
        let _ = writeln!(out, "  Scope  : {} ({})", scope, disk.scope.location());
        let _ = writeln!(
            out,
            "  Size   : {}",
            disk.size_gb
                .as_ref()
                .map(|s| format!("{} GB", s))
                .unwrap_or_else(|| "unknown".to_string())
        );
        let _ = writeln!(out, "  Type   : {}", opt(&disk.disk_type));
        if let Some(device) = &disk.device_name {
            let _ = writeln!(out, "  Device : {}", device);
        }
    }

    let _ = writeln!(out, "\n--- Network ---");
    let _ = writeln!(out, "Network     : {}", opt(&summary.network.network));
    let _ = writeln!(out, "Subnetwork  : {}", opt(&summary.network.subnetwork));
    let _ = writeln!(out, "Internal IP : {}", opt(&summary.network.internal_ip));
    let _ = writeln!(
        out,
        "External IP : {}",
        summary.network.external_ip.as_deref().unwrap_or("none")
    );

    let _ = writeln!(out, "\n--- Identity ---");
    let _ = writeln!(
        out,
        "Service account : {}",
        summary.service_account.as_deref().unwrap_or("none")
    );
    let _ = writeln!(
        out,
        "Tags            : {}",
        if summary.tags.is_empty() {
            "none".to_string()
        } else {
            summary.tags.join(", ")
        }
    );

    for (disk, commands) in disks {
        let _ = writeln!(out, "\n{}", RULE);
        let _ = writeln!(out, " Backup commands: {}", disk.name);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "# 1. Create a snapshot of the disk");
        let _ = writeln!(out, "{}", commands.snapshot);
        let _ = writeln!(out, "\n# 2. Create an image from that snapshot");
        let _ = writeln!(out, "{}", commands.image_from_snapshot);
        let _ = writeln!(out, "\n# 3. Recreate the disk from the image");
        let _ = writeln!(out, "{}", commands.disk_from_image);
        let _ = writeln!(out, "\n# 4. Recreate the disk directly from the snapshot");
        let _ = writeln!(out, "{}", commands.disk_from_snapshot);
    }

    out
}
