use crate::utils::error::{ReportError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// RFC 1035 label, the naming rule GCE applies to projects, instances and disks.
static RESOURCE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]([-a-z0-9]{0,61}[a-z0-9])?$").expect("resource name pattern")
});

// e.g. us-central1-a, europe-west4-b
static ZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+-[a-z]+[0-9]+-[a-z]$").expect("zone pattern"));

pub fn validate_resource_name(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if !RESOURCE_NAME_RE.is_match(value) {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be a lowercase RFC-1035 name (letters, digits, hyphens)".to_string(),
        });
    }

    Ok(())
}

pub fn validate_zone(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if !ZONE_RE.is_match(value) {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must look like <continent>-<region><n>-<letter>, e.g. us-central1-a"
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
