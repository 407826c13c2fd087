//! Service configuration
//!
//! Aggregates the resolver and encoder settings with the HTTP listener
//! settings. Loaded from an optional JSON file and then overridden by CLI
//! flags in `main`.

use mission_core::ResolverConfig;
use mission_export::{CsvConfig, KmlConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {reason}")]
    Read { path: String, reason: String },

    /// Configuration file is not valid JSON for this schema
    #[error("Invalid configuration file {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener configuration
    pub http: HttpConfig,
    /// Trajectory resolver constants
    pub resolver: ResolverConfig,
    /// Litchi CSV constant columns
    pub csv: CsvConfig,
    /// KML styling
    pub kml: KmlConfig,
}

impl ServiceConfig {
    /// Load configuration from a JSON file; missing sections take defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind (0 = auto-assign)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl HttpConfig {
    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
