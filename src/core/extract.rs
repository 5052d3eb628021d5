use crate::domain::model::{InstanceSummary, MachineTypeSpec, NetworkSummary};
use serde_json::Value;

/// Last path segment of a resource URL, e.g.
/// `.../machineTypes/e2-medium` -> `e2-medium`.
pub fn resource_basename(path: &str) -> &str {
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path)
}

pub fn machine_type_name(instance: &Value) -> Option<String> {
    instance
        .get("machineType")
        .and_then(|v| v.as_str())
        .map(|s| resource_basename(s).to_string())
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn extract_machine(instance: &Value, machine_type: Option<&Value>) -> MachineTypeSpec {
    let name = machine_type
        .and_then(|mt| str_field(mt, "name"))
        .or_else(|| machine_type_name(instance))
        .unwrap_or_else(|| "unknown".to_string());

    MachineTypeSpec {
        name,
        guest_cpus: machine_type.and_then(|mt| mt.get("guestCpus")).and_then(Value::as_i64),
        memory_mb: machine_type.and_then(|mt| mt.get("memoryMb")).and_then(Value::as_i64),
        description: machine_type.and_then(|mt| str_field(mt, "description")),
    }
}

fn extract_network(instance: &Value) -> NetworkSummary {
    let nic = instance
        .get("networkInterfaces")
        .and_then(|v| v.as_array())
        .and_then(|a| a.first());

    NetworkSummary {
        network: nic
            .and_then(|n| str_field(n, "network"))
            .map(|n| resource_basename(&n).to_string()),
        subnetwork: nic
            .and_then(|n| str_field(n, "subnetwork"))
            .map(|n| resource_basename(&n).to_string()),
        internal_ip: nic.and_then(|n| str_field(n, "networkIP")),
        external_ip: nic
            .and_then(|n| n.get("accessConfigs"))
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|ac| str_field(ac, "natIP")),
    }
}

/// Pulls the report fields out of the raw describe payloads. Absent fields
/// come back as None and render as "none"/"unknown"; extraction never fails.
pub fn extract_summary(
    instance: &Value,
    machine_type: Option<&Value>,
    fallback_name: &str,
) -> InstanceSummary {
    InstanceSummary {
        name: str_field(instance, "name").unwrap_or_else(|| fallback_name.to_string()),
        status: str_field(instance, "status"),
        cpu_platform: str_field(instance, "cpuPlatform"),
        machine: extract_machine(instance, machine_type),
        network: extract_network(instance),
        service_account: instance
            .get("serviceAccounts")
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|sa| str_field(sa, "email")),
        tags: instance
            .get("tags")
            .and_then(|t| t.get("items"))
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default(),
    }
}
