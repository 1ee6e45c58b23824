use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the semver resource step
#[derive(Error, Debug)]
pub enum SemverResourceError {
    #[error("Failed to decode request")]
    EnvelopeDecode(#[from] serde_json::Error),

    #[error("Malformed version '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    #[error("No such region '{0}'")]
    UnresolvedRegion(String),

    #[error("Cannot start a pre-release of {version} without a label")]
    MissingPreReleaseLabel { version: String },

    #[error("Invalid pre-release label: '{0}'")]
    InvalidPreReleaseLabel(String),

    #[error("Version component overflow while bumping {0}")]
    Overflow(String),

    #[error("Destination I/O error at {}", path.display())]
    DestinationIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write response")]
    ResponseIo(#[source] std::io::Error),

    #[error("Failed to set up bucket client")]
    Storage(#[from] s3::error::S3Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in the semver resource
pub type Result<T> = std::result::Result<T, SemverResourceError>;

impl SemverResourceError {
    /// Create a malformed-version error for the given input
    pub fn version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        SemverResourceError::MalformedVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverResourceError::Config(msg.into())
    }

    /// Wrap an I/O failure on the destination path
    pub fn destination(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SemverResourceError::DestinationIo {
            path: path.into(),
            source,
        }
    }
}
