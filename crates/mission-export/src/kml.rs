//! KML path document encoder
//!
//! Emits one tessellated `LineString` through every mission point followed
//! by one `Point` placemark per mission point. The document starts with the
//! XML prolog as its very first bytes; some viewers reject anything else.

use std::fmt::Write;

use mission_core::{Mission, MissionPoint};
use tracing::debug;

use crate::config::KmlConfig;
use crate::error::Result;
use crate::{ensure_encodable, ExportFormat, MissionEncoder};

/// XML prolog every KML document begins with
pub const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// KML 2.2 namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Encodes missions as KML
#[derive(Debug, Clone, Default)]
pub struct KmlEncoder {
    config: KmlConfig,
}

impl KmlEncoder {
    /// Create an encoder with the given styling
    pub fn new(config: KmlConfig) -> Self {
        Self { config }
    }

    fn render(&self, points: &[MissionPoint]) -> Result<String> {
        let c = &self.config;
        let mut kml = String::with_capacity(512 + 160 * points.len());

        writeln!(kml, "{}", XML_PROLOG)?;
        writeln!(kml, r#"<kml xmlns="{}">"#, KML_NAMESPACE)?;
        writeln!(kml, "<Document>")?;
        writeln!(kml, "  <name>{}</name>", escape(&c.document_name))?;
        writeln!(kml, r#"  <Style id="pathStyle">"#)?;
        writeln!(kml, "    <LineStyle>")?;
        writeln!(kml, "      <color>{}</color>", escape(&c.line_color))?;
        writeln!(kml, "      <width>{}</width>", c.line_width)?;
        writeln!(kml, "    </LineStyle>")?;
        writeln!(kml, "  </Style>")?;

        writeln!(kml, "  <Placemark>")?;
        writeln!(kml, "    <name>{}</name>", escape(&c.path_name))?;
        writeln!(kml, "    <styleUrl>#pathStyle</styleUrl>")?;
        writeln!(kml, "    <LineString>")?;
        writeln!(kml, "      <tessellate>1</tessellate>")?;
        writeln!(kml, "      <altitudeMode>absolute</altitudeMode>")?;
        writeln!(kml, "      <coordinates>")?;
        for point in points {
            writeln!(kml, "        {}", coordinate(point))?;
        }
        writeln!(kml, "      </coordinates>")?;
        writeln!(kml, "    </LineString>")?;
        writeln!(kml, "  </Placemark>")?;

        for (index, point) in points.iter().enumerate() {
            writeln!(kml, "  <Placemark>")?;
            writeln!(kml, "    <name>{}</name>", placemark_name(index))?;
            writeln!(kml, "    <Point>")?;
            writeln!(kml, "      <altitudeMode>absolute</altitudeMode>")?;
            writeln!(kml, "      <coordinates>{}</coordinates>", coordinate(point))?;
            writeln!(kml, "    </Point>")?;
            writeln!(kml, "  </Placemark>")?;
        }

        writeln!(kml, "</Document>")?;
        write!(kml, "</kml>")?;
        Ok(kml)
    }
}

impl MissionEncoder for KmlEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Kml
    }

    fn encode(&self, mission: &Mission) -> Result<Vec<u8>> {
        ensure_encodable(&mission.points)?;
        let kml = self.render(&mission.points)?;
        debug!(placemarks = mission.points.len(), bytes = kml.len(), "encoded kml");
        Ok(kml.into_bytes())
    }
}

/// Label of the point placemark at `index`: "Home", then "WP 1", "WP 2", ...
pub fn placemark_name(index: usize) -> String {
    if index == 0 {
        "Home".to_string()
    } else {
        format!("WP {}", index)
    }
}

fn coordinate(point: &MissionPoint) -> String {
    format!("{},{},{}", point.longitude_deg, point.latitude_deg, point.altitude_m)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
