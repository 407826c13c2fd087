//! Mission data model
//!
//! A [`MissionContext`] is what the pilot authors: a home position, a home
//! heading and an ordered list of relative [`Leg`]s. A [`Mission`] is what
//! the resolver produces from it: absolute [`MissionPoint`]s ready to encode.

use serde::{Deserialize, Serialize};

use crate::error::{MissionError, Result};
use crate::location::Location;

/// Default point-of-interest altitude in meters
pub const DEFAULT_POI_ALTITUDE_M: f64 = 1.0;

/// One relative waypoint specification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Ground distance to travel for this leg
    pub horizontal_distance_m: f64,
    /// Target altitude at the leg's endpoint
    pub vertical_altitude_m: f64,
    /// Heading offset from the home heading
    pub relative_bearing_deg: f64,
    /// Loiter duration at the endpoint
    #[serde(default)]
    pub hold_time_s: f64,
    /// Target speed approaching the endpoint
    #[serde(default)]
    pub speed_mps: f64,
}

impl Leg {
    /// Create a leg with no hold time and zero speed
    pub fn new(horizontal_distance_m: f64, vertical_altitude_m: f64, relative_bearing_deg: f64) -> Self {
        Self {
            horizontal_distance_m,
            vertical_altitude_m,
            relative_bearing_deg,
            hold_time_s: 0.0,
            speed_mps: 0.0,
        }
    }

    /// Set the approach speed
    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed_mps = speed_mps;
        self
    }

    /// Set the hold time
    pub fn with_hold_time(mut self, hold_time_s: f64) -> Self {
        self.hold_time_s = hold_time_s;
        self
    }

    /// Check this leg's fields; `index` is the zero-based position in the mission
    pub fn validate(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("waypoints[{}].{}", index, name);

        require_finite(&field("horizontal"), self.horizontal_distance_m)?;
        require_finite(&field("vertical"), self.vertical_altitude_m)?;
        require_finite(&field("bearing"), self.relative_bearing_deg)?;
        require_finite(&field("hold_time"), self.hold_time_s)?;
        require_finite(&field("speed"), self.speed_mps)?;

        require_non_negative(&field("horizontal"), self.horizontal_distance_m)?;
        require_non_negative(&field("hold_time"), self.hold_time_s)?;
        require_non_negative(&field("speed"), self.speed_mps)?;
        Ok(())
    }
}

/// A fully resolved absolute point in the output trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    /// Heading clockwise from true north, in [0, 360)
    pub absolute_heading_deg: f64,
    pub speed_mps: f64,
    /// Carried through from the leg; zero for home
    pub hold_time_s: f64,
}

impl MissionPoint {
    /// Horizontal position of this point
    pub fn location(&self) -> Location {
        Location::new(self.latitude_deg, self.longitude_deg)
    }
}

/// Input envelope for one resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionContext {
    pub home_latitude: f64,
    pub home_longitude: f64,
    /// Reference heading every leg bearing is measured against
    #[serde(default)]
    pub home_heading: f64,
    #[serde(default = "default_poi_altitude")]
    pub poi_altitude_m: f64,
    pub legs: Vec<Leg>,
}

fn default_poi_altitude() -> f64 {
    DEFAULT_POI_ALTITUDE_M
}

impl MissionContext {
    /// Create a context with zero home heading and the default POI altitude
    pub fn new(home_latitude: f64, home_longitude: f64, legs: Vec<Leg>) -> Self {
        Self {
            home_latitude,
            home_longitude,
            home_heading: 0.0,
            poi_altitude_m: DEFAULT_POI_ALTITUDE_M,
            legs,
        }
    }

    /// Set the home heading
    pub fn with_home_heading(mut self, heading_deg: f64) -> Self {
        self.home_heading = heading_deg;
        self
    }

    /// Set the point-of-interest altitude
    pub fn with_poi_altitude(mut self, altitude_m: f64) -> Self {
        self.poi_altitude_m = altitude_m;
        self
    }

    /// Home position
    pub fn home(&self) -> Location {
        Location::new(self.home_latitude, self.home_longitude)
    }

    /// Check every field of the context, stopping at the first failure
    pub fn validate(&self) -> Result<()> {
        validate_coordinate("init_lat", self.home_latitude, "init_lon", self.home_longitude)?;
        require_finite("init_bearing", self.home_heading)?;
        require_finite("poi_altitude", self.poi_altitude_m)?;

        if self.legs.is_empty() {
            return Err(MissionError::EmptyMission);
        }
        for (index, leg) in self.legs.iter().enumerate() {
            leg.validate(index)?;
        }
        Ok(())
    }
}

/// The point the camera is aimed at during the mission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

/// A resolved mission, ready for encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Home point first, then one point per leg in input order
    pub points: Vec<MissionPoint>,
    pub point_of_interest: PointOfInterest,
}

impl Mission {
    /// Number of resolved legs, excluding home
    pub fn leg_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Total horizontal path length in meters on a sphere of `radius_m`
    pub fn path_length_m(&self, radius_m: f64) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].location().distance_to(&pair[1].location(), radius_m))
            .sum()
    }
}

/// Check a latitude/longitude pair lies in the valid domain, naming the offending field
pub fn validate_coordinate(lat_field: &str, latitude: f64, lon_field: &str, longitude: f64) -> Result<()> {
    require_in_range(lat_field, latitude, -90.0, 90.0)?;
    require_in_range(lon_field, longitude, -180.0, 180.0)
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MissionError::invalid(field, "must be a finite number"))
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(MissionError::invalid(field, format!("must not be negative (got {})", value)))
    }
}

fn require_in_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(MissionError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}
