//! Mission Export - Interchange encoders for resolved missions
//!
//! This crate renders a [`Mission`] produced by `mission-core` into the
//! formats flight tools consume.
//!
//! ## Components
//!
//! - **litchi**: Litchi waypoint table (`text/csv`)
//! - **kml**: Path and placemark document (`application/vnd.google-earth.kml+xml`)
//! - **config**: Constant columns and document styling
//! - **error**: Encoding error types
//!
//! ## Example
//!
//! ```rust
//! use mission_core::{Leg, MissionContext, TrajectoryResolver};
//! use mission_export::{CsvEncoder, MissionEncoder};
//!
//! let context = MissionContext::new(10.0, 20.0, vec![Leg::new(1000.0, 50.0, 90.0)]);
//! let mission = TrajectoryResolver::default().resolve_mission(&context).unwrap();
//!
//! let bytes = CsvEncoder::default().encode(&mission).unwrap();
//! assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
//! ```

pub mod config;
pub mod error;
pub mod kml;
pub mod litchi;

use mission_core::{Mission, MissionPoint};
use serde::{Deserialize, Serialize};

// Re-exports for convenience
pub use config::{CsvConfig, KmlConfig};
pub use litchi::CsvEncoder;
pub use error::{ExportError, Result};
pub use kml::KmlEncoder;

/// Output formats a mission can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Litchi waypoint CSV
    LitchiCsv,
    /// KML path document
    Kml,
}

impl ExportFormat {
    /// MIME type of the encoded body
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::LitchiCsv => "text/csv",
            ExportFormat::Kml => "application/vnd.google-earth.kml+xml",
        }
    }

    /// Attachment file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::LitchiCsv => "litchi_waypoints.csv",
            ExportFormat::Kml => "mission_path.kml",
        }
    }
}

/// Trait for mission encoders
pub trait MissionEncoder: Send + Sync {
    /// Format this encoder produces
    fn format(&self) -> ExportFormat;

    /// Render the whole mission; no partial output on failure
    fn encode(&self, mission: &Mission) -> Result<Vec<u8>>;
}

/// Encode as Litchi CSV with default constants
pub fn encode_csv(mission: &Mission) -> Result<Vec<u8>> {
    CsvEncoder::default().encode(mission)
}

/// Encode as KML with default styling
pub fn encode_kml(mission: &Mission) -> Result<Vec<u8>> {
    KmlEncoder::default().encode(mission)
}

/// Reject missions that cannot be rendered faithfully
pub(crate) fn ensure_encodable(points: &[MissionPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(ExportError::EmptyMission);
    }
    for (index, point) in points.iter().enumerate() {
        let fields = [
            ("latitude", point.latitude_deg),
            ("longitude", point.longitude_deg),
            ("altitude", point.altitude_m),
            ("heading", point.absolute_heading_deg),
            ("speed", point.speed_mps),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ExportError::NonFinite { index, field });
        }
    }
    Ok(())
}
