//! Request and response bodies

use mission_core::mission::DEFAULT_POI_ALTITUDE_M;
use mission_core::{Leg, MissionContext, MissionError};
use serde::{Deserialize, Serialize};

/// Mission generation request
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionRequest {
    pub init_lat: Option<f64>,
    pub init_lon: Option<f64>,
    #[serde(default)]
    pub init_bearing: f64,
    #[serde(default = "default_poi_altitude")]
    pub poi_altitude: f64,
    #[serde(default)]
    pub waypoints: Vec<WaypointRequest>,
}

fn default_poi_altitude() -> f64 {
    DEFAULT_POI_ALTITUDE_M
}

/// One relative leg as sent by the client
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaypointRequest {
    pub horizontal: Option<f64>,
    pub vertical: Option<f64>,
    pub bearing: Option<f64>,
    #[serde(default)]
    pub hold_time: f64,
    #[serde(default)]
    pub speed: f64,
}

impl WaypointRequest {
    /// Convert into a [`Leg`]; `index` names the waypoint in errors
    pub fn into_leg(self, index: usize) -> Result<Leg, MissionError> {
        let field = |name: &str| format!("waypoints[{}].{}", index, name);
        Ok(Leg {
            horizontal_distance_m: required(self.horizontal, || field("horizontal"))?,
            vertical_altitude_m: required(self.vertical, || field("vertical"))?,
            relative_bearing_deg: required(self.bearing, || field("bearing"))?,
            hold_time_s: self.hold_time,
            speed_mps: self.speed,
        })
    }
}

impl TryFrom<MissionRequest> for MissionContext {
    type Error = MissionError;

    fn try_from(req: MissionRequest) -> Result<Self, Self::Error> {
        let home_latitude = required(req.init_lat, || "init_lat".to_string())?;
        let home_longitude = required(req.init_lon, || "init_lon".to_string())?;
        let legs = req
            .waypoints
            .into_iter()
            .enumerate()
            .map(|(index, wp)| wp.into_leg(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MissionContext {
            home_latitude,
            home_longitude,
            home_heading: req.init_bearing,
            poi_altitude_m: req.poi_altitude,
            legs,
        })
    }
}

/// Absent and `null` both count as missing
fn required(value: Option<f64>, field: impl FnOnce() -> String) -> Result<f64, MissionError> {
    value.ok_or_else(|| MissionError::MissingField(field()))
}

/// Query for a single projection
#[derive(Debug, Clone, Deserialize)]
pub struct PointQuery {
    pub lat: f64,
    pub lon: f64,
    pub bearing: f64,
    pub distance: f64,
}

/// Projected coordinate
#[derive(Debug, Clone, Serialize)]
pub struct PointResponse {
    pub lat: f64,
    pub lon: f64,
}

/// Encoder liveness
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
