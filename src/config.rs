use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SemverResourceError};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "semver-resource.toml";

/// Represents the complete configuration for the semver resource.
///
/// Contains remote storage defaults and behavior options. Nothing here
/// changes how versions are bumped.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the region used when a request leaves `region_name` empty.
fn default_region() -> String {
    "us-east-1".to_string()
}

/// Configuration for the remote version ledger.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Extra named regions, mapped to their S3 endpoint URL
    #[serde(default)]
    pub regions: HashMap<String, String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            default_region: default_region(),
            regions: HashMap::new(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Suppress the "bumped locally" notice
    #[serde(default)]
    pub quiet: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-resource.toml` in current directory
/// 3. `semver-resource.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let config_str = fs::read_to_string(&path).map_err(|e| {
                SemverResourceError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            parse_config(&config_str)
        }
        None => Ok(Config::default()),
    }
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| SemverResourceError::config(e.to_string()))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
