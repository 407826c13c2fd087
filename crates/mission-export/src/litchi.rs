//! Litchi waypoint CSV encoder
//!
//! One header row followed by one row per mission point, sixteen columns
//! each. Coordinates carry 8 decimals and altitude, heading and speed carry 2;
//! the Litchi importer depends on this precision.

use mission_core::{Mission, MissionPoint, PointOfInterest};
use tracing::debug;

use crate::config::CsvConfig;
use crate::error::Result;
use crate::{ensure_encodable, ExportFormat, MissionEncoder};

/// UTF-8 byte-order mark expected by spreadsheet importers
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column names of the Litchi waypoint table
pub const LITCHI_HEADER: [&str; 16] = [
    "latitude",
    "longitude",
    "altitude(m)",
    "heading(deg)",
    "curvesize(m)",
    "rotationdir",
    "gimbalmode",
    "gimbalpitchangle",
    "altitudemode",
    "speed(m/s)",
    "poi_latitude",
    "poi_longitude",
    "poi_altitude(m)",
    "poi_altitudemode",
    "photo_timeinterval",
    "photo_distinterval",
];

/// Encodes missions as Litchi waypoint CSV
#[derive(Debug, Clone, Default)]
pub struct CsvEncoder {
    config: CsvConfig,
}

impl CsvEncoder {
    /// Create an encoder with the given constant columns
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    fn row(&self, point: &MissionPoint, poi: &PointOfInterest) -> [String; 16] {
        let c = &self.config;
        [
            format!("{:.8}", point.latitude_deg),
            format!("{:.8}", point.longitude_deg),
            format!("{:.2}", point.altitude_m),
            format!("{:.2}", point.absolute_heading_deg),
            format!("{:.2}", c.curve_size_m),
            c.rotation_dir.to_string(),
            c.gimbal_mode.to_string(),
            c.gimbal_pitch_angle.to_string(),
            c.altitude_mode.to_string(),
            format!("{:.2}", point.speed_mps),
            format!("{:.8}", poi.latitude_deg),
            format!("{:.8}", poi.longitude_deg),
            format!("{:.2}", poi.altitude_m),
            c.poi_altitude_mode.to_string(),
            c.photo_time_interval.to_string(),
            c.photo_dist_interval.to_string(),
        ]
    }
}

impl MissionEncoder for CsvEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::LitchiCsv
    }

    fn encode(&self, mission: &Mission) -> Result<Vec<u8>> {
        ensure_encodable(&mission.points)?;

        let mut buffer = Vec::with_capacity(128 * (mission.points.len() + 1));
        if self.config.byte_order_mark {
            buffer.extend_from_slice(UTF8_BOM);
        }

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(buffer);

        writer.write_record(LITCHI_HEADER)?;
        for point in &mission.points {
            writer.write_record(&self.row(point, &mission.point_of_interest))?;
        }
        let bytes = writer.into_inner()?;

        debug!(rows = mission.points.len(), bytes = bytes.len(), "encoded litchi csv");
        Ok(bytes)
    }
}
