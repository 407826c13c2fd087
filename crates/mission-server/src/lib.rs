//! Mission Server - HTTP front end for mission generation
//!
//! Accepts relative-leg mission requests as JSON, resolves them with
//! `mission-core` and answers with a Litchi CSV or KML attachment produced by
//! `mission-export`.

pub mod config;
pub mod server;

use std::sync::atomic::AtomicU64;
use std::time::Instant;

use mission_core::TrajectoryResolver;
use mission_export::{CsvEncoder, KmlEncoder};

pub use config::{ConfigError, HttpConfig, ServiceConfig};

/// Application state shared across handlers
pub struct AppState {
    /// Resolver with the configured constants
    pub resolver: TrajectoryResolver,
    /// Litchi CSV encoder
    pub csv: CsvEncoder,
    /// KML encoder
    pub kml: KmlEncoder,
    /// Number of missions successfully encoded
    pub missions_generated: AtomicU64,
    /// Service start time
    pub start_time: Instant,
}

impl AppState {
    /// Build the state from configuration
    pub fn new(config: &ServiceConfig) -> mission_core::Result<Self> {
        Ok(Self {
            resolver: TrajectoryResolver::new(config.resolver)?,
            csv: CsvEncoder::new(config.csv.clone()),
            kml: KmlEncoder::new(config.kml.clone()),
            missions_generated: AtomicU64::new(0),
            start_time: Instant::now(),
        })
    }
}
