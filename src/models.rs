//! Request and response envelopes exchanged with the pipeline over stdio

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::BumpRequest;

/// Remote version-ledger settings. Opaque to the bump engine.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(alias = "accessKeyId", deserialize_with = "null_as_default")]
    pub access_key_id: String,
    #[serde(alias = "secretAccessKey", deserialize_with = "null_as_default")]
    pub secret_access_key: String,
    #[serde(alias = "regionName", deserialize_with = "null_as_default")]
    pub region_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bucket: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("region_name", &self.region_name)
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .field("key", &self.key)
            .finish()
    }
}

/// Read an explicit `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// The version identity as the pipeline sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRef {
    pub number: String,
}

/// Request read from standard input
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Source,
    pub version: VersionRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: BumpRequest,
}

/// One `(name, value)` pair of response metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    pub name: String,
    pub value: String,
}

/// Response written to standard output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InResponse {
    pub version: VersionRef,
    pub metadata: Vec<MetadataField>,
}

impl InResponse {
    /// Response echoing `version` with its number as the only metadata entry
    pub fn echo(version: &VersionRef) -> Self {
        InResponse {
            version: version.clone(),
            metadata: vec![MetadataField {
                name: "number".to_string(),
                value: version.number.clone(),
            }],
        }
    }
}
