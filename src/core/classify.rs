use crate::domain::model::DiskScope;
use crate::utils::error::{ReportError, Result};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDisk {
    pub name: String,
    pub scope: DiskScope,
}

/// Classifies a disk by its source resource path.
///
/// Attached disks reference their backing resource either as a full URL
/// (`https://www.googleapis.com/compute/v1/projects/p/zones/z/disks/d`) or a
/// relative path (`projects/p/regions/r/disks/d`). A `zones/<zone>` segment
/// means a zonal disk, a `regions/<region>` segment a regional one.
pub fn classify_disk_source(source: &str) -> Result<ClassifiedDisk> {
    let path = if source.starts_with("http://") || source.starts_with("https://") {
        let url = Url::parse(source).map_err(|_| ReportError::UnknownDiskScope {
            path: source.to_string(),
        })?;
        url.path().to_string()
    } else {
        source.to_string()
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut scope = None;
    let mut name = None;
    for pair in segments.windows(2) {
        match pair[0] {
            "zones" => {
                scope = Some(DiskScope::Zonal {
                    zone: pair[1].to_string(),
                })
            }
            "regions" => {
                scope = Some(DiskScope::Regional {
                    region: pair[1].to_string(),
                })
            }
            "disks" => name = Some(pair[1].to_string()),
            _ => {}
        }
    }

    match (scope, name) {
        (Some(scope), Some(name)) => Ok(ClassifiedDisk { name, scope }),
        _ => Err(ReportError::UnknownDiskScope {
            path: source.to_string(),
        }),
    }
}
