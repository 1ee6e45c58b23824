use s3::Region;

use crate::config::StorageConfig;
use crate::error::{Result, SemverResourceError};

/// Look up a region by name.
///
/// An empty name means the configured default region. Entries from
/// `[storage.regions]` take priority over the regions `s3` knows about.
pub fn resolve_region(name: &str, config: &StorageConfig) -> Result<Region> {
    let name = if name.is_empty() {
        config.default_region.as_str()
    } else {
        name
    };

    if let Some(endpoint) = config.regions.get(name) {
        return Ok(Region::Custom {
            region: name.to_string(),
            endpoint: endpoint.clone(),
        });
    }

    // `s3` turns any unrecognised name into `Region::Custom` instead of failing
    match name.parse::<Region>() {
        Ok(Region::Custom { .. }) | Err(_) => {
            Err(SemverResourceError::UnresolvedRegion(name.to_string()))
        }
        Ok(region) => Ok(region),
    }
}

/// Address `region` through an explicit host, e.g. a MinIO or GCS endpoint.
pub fn with_endpoint(region: &Region, endpoint: &str) -> Region {
    Region::Custom {
        region: region.to_string(),
        endpoint: format!("https://{}", endpoint),
    }
}
