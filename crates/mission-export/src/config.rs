//! Configuration for the mission encoders
//!
//! The Litchi CSV columns that are not derived from a mission point and the
//! KML document styling are fixed per deployment, so they live here rather
//! than in the encoders.

use serde::{Deserialize, Serialize};

/// Constant columns of the Litchi waypoint table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Curve size in meters (0 = stop at each waypoint)
    pub curve_size_m: f64,
    /// Rotation direction (0 = clockwise)
    pub rotation_dir: i32,
    /// Gimbal mode (0 = disabled)
    pub gimbal_mode: i32,
    /// Gimbal pitch angle in degrees
    pub gimbal_pitch_angle: i32,
    /// Altitude mode (0 = relative to takeoff)
    pub altitude_mode: i32,
    /// POI altitude mode (0 = relative to takeoff)
    pub poi_altitude_mode: i32,
    /// Seconds between photos (-1 = disabled)
    pub photo_time_interval: i32,
    /// Meters between photos (-1 = disabled)
    pub photo_dist_interval: i32,
    /// Prefix the output with a UTF-8 byte-order mark
    pub byte_order_mark: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            curve_size_m: 0.0,
            rotation_dir: 0,
            gimbal_mode: 0,
            gimbal_pitch_angle: 0,
            altitude_mode: 0,
            poi_altitude_mode: 0,
            photo_time_interval: -1,
            photo_dist_interval: -1,
            byte_order_mark: true,
        }
    }
}

/// KML document styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KmlConfig {
    /// Document name
    pub document_name: String,
    /// Name of the path placemark
    pub path_name: String,
    /// Line color in KML `aabbggrr` hex
    pub line_color: String,
    /// Line width in pixels
    pub line_width: u32,
}

impl Default for KmlConfig {
    fn default() -> Self {
        Self {
            document_name: "Mission Path".to_string(),
            path_name: "Flight Path".to_string(),
            line_color: "ff00aaff".to_string(),
            line_width: 4,
        }
    }
}
