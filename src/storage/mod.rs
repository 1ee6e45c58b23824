//! Remote version-ledger client
//!
//! Only construction lives here: the fetch step resolves the region and
//! credentials so that a misconfigured source fails early, but it never
//! talks to the bucket.

pub mod region;

pub use region::{resolve_region, with_endpoint};

use s3::creds::Credentials;
use s3::{Bucket, Region};

use crate::config::StorageConfig;
use crate::error::Result;
use crate::models::Source;

/// A handle on one bucket in one region
#[derive(Clone)]
pub struct BucketClient {
    bucket: Bucket,
}

impl BucketClient {
    /// Build a client from the request source.
    ///
    /// The region name is always resolved, even when an explicit endpoint
    /// will replace it, so an unknown name fails with `UnresolvedRegion`.
    pub fn new(source: &Source, config: &StorageConfig) -> Result<Self> {
        let mut region = resolve_region(&source.region_name, config)?;

        if !source.endpoint.is_empty() {
            region = with_endpoint(&region, &source.endpoint);
        }

        let credentials = Credentials {
            access_key: non_empty(&source.access_key_id),
            secret_key: non_empty(&source.secret_access_key),
            security_token: None,
            session_token: None,
            expiration: None,
        };

        let bucket = *Bucket::new(&source.bucket, region, credentials)?;
        Ok(BucketClient { bucket })
    }

    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    pub fn name(&self) -> String {
        self.bucket.name()
    }

    pub fn region(&self) -> Region {
        self.bucket.region()
    }
}

impl std::fmt::Debug for BucketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketClient")
            .field("name", &self.name())
            .field("region", &self.region())
            .finish_non_exhaustive()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemverResourceError;

    fn source(region_name: &str, endpoint: &str) -> Source {
        Source {
            access_key_id: "AKIA".to_string(),
            secret_access_key: "shh".to_string(),
            region_name: region_name.to_string(),
            endpoint: endpoint.to_string(),
            bucket: "versions".to_string(),
            key: "number".to_string(),
        }
    }

    #[test]
    fn test_client_default_region() {
        let client = BucketClient::new(&source("", ""), &StorageConfig::default()).unwrap();
        assert!(matches!(client.region(), Region::UsEast1));
        assert_eq!(client.name(), "versions");
    }

    #[test]
    fn test_client_endpoint_replaces_region() {
        let client = BucketClient::new(
            &source("us-west-2", "minio.internal:9000"),
            &StorageConfig::default(),
        )
        .unwrap();
        match client.region() {
            Region::Custom { region, endpoint } => {
                assert_eq!(region, "us-west-2");
                assert_eq!(endpoint, "https://minio.internal:9000");
            }
            other => panic!("expected a custom region, got {:?}", other),
        }
    }

    #[test]
    fn test_client_unknown_region_fails_even_with_endpoint() {
        let err = BucketClient::new(
            &source("nowhere-1", "minio.internal:9000"),
            &StorageConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SemverResourceError::UnresolvedRegion(_)));
    }

    #[test]
    fn test_client_debug_hides_secrets() {
        let client = BucketClient::new(&source("", ""), &StorageConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("shh"));
        assert!(!debug.contains("AKIA"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("AKIA"), Some("AKIA".to_string()));
    }
}
