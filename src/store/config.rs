//! Configuration file support.
//!
//! This module provides utilities for reading runtime configuration from a
//! TOML file (`fleetline.toml`), with environment variables taking
//! precedence at the call sites that consume each section.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;

/// Runtime configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub broadcast: BroadcastSettings,
    #[serde(default)]
    pub geolocate: GeolocateSettings,
}

/// Store backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Backend selector ("local")
    #[serde(rename = "type", default = "default_store_type")]
    pub store_type: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_type: default_store_type(),
        }
    }
}

/// Live broadcast hub settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastSettings {
    /// Per-channel buffered event capacity; slow subscribers past this lag
    /// skip ahead instead of blocking publishers.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for BroadcastSettings {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Geolocation fallback collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocateSettings {
    /// Endpoint returning `{"lat": .., "lon": ..}` JSON
    #[serde(default = "default_geolocate_url")]
    pub url: String,
    #[serde(default = "default_geolocate_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeolocateSettings {
    fn default() -> Self {
        Self {
            url: default_geolocate_url(),
            timeout_secs: default_geolocate_timeout(),
        }
    }
}

fn default_store_type() -> String {
    "local".to_string()
}

fn default_channel_capacity() -> usize {
    256
}

fn default_geolocate_url() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_geolocate_timeout() -> u64 {
    5
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(StoreError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `fleetline.toml` in the current directory, then the
    /// parent directory. Falls back to defaults when no file is found.
    pub fn load_default() -> Self {
        for candidate in Self::default_paths() {
            if candidate.exists() {
                match Self::from_file(&candidate) {
                    Ok(config) => return config,
                    Err(e) => {
                        log::warn!(
                            "Ignoring unreadable config file {}: {}",
                            candidate.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    fn default_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("fleetline.toml"),
            PathBuf::from("../fleetline.toml"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store.store_type, "local");
        assert_eq!(config.broadcast.channel_capacity, 256);
        assert_eq!(config.geolocate.timeout_secs, 5);
    }

    #[test]
    fn test_from_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[broadcast]\nchannel_capacity = 16\n\n[geolocate]\nurl = \"http://localhost:9/json\""
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.broadcast.channel_capacity, 16);
        assert_eq!(config.geolocate.url, "http://localhost:9/json");
        // Untouched section falls back to defaults
        assert_eq!(config.store.store_type, "local");
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store = [[[").unwrap();

        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(StoreError::Configuration { .. })));
    }
}
