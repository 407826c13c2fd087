//! Configuration types for trajectory resolution
//!
//! The physical and policy constants used by the resolver live here so they
//! can be injected instead of read from globals.

use serde::{Deserialize, Serialize};

/// Sphere radius used for geodesic projection (WGS84 equatorial radius)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Altitude assigned to the synthetic home point
pub const DEFAULT_LAUNCH_ALTITUDE_M: f64 = 5.0;

/// Lowest altitude any resolved waypoint may be given
pub const DEFAULT_MIN_ALTITUDE_M: f64 = 2.0;

/// Resolver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Radius of the projection sphere in meters
    #[serde(default = "default_earth_radius")]
    pub earth_radius_m: f64,
    /// Altitude of the home point in meters
    #[serde(default = "default_launch_altitude")]
    pub launch_altitude_m: f64,
    /// Floor applied to every leg's altitude
    #[serde(default = "default_min_altitude")]
    pub min_altitude_m: f64,
}

fn default_earth_radius() -> f64 {
    EARTH_RADIUS_M
}

fn default_launch_altitude() -> f64 {
    DEFAULT_LAUNCH_ALTITUDE_M
}

fn default_min_altitude() -> f64 {
    DEFAULT_MIN_ALTITUDE_M
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: EARTH_RADIUS_M,
            launch_altitude_m: DEFAULT_LAUNCH_ALTITUDE_M,
            min_altitude_m: DEFAULT_MIN_ALTITUDE_M,
        }
    }
}

impl ResolverConfig {
    /// Reject configurations the resolver cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(crate::MissionError::invalid(
                "earth_radius_m",
                "must be a positive finite number",
            ));
        }
        if !self.launch_altitude_m.is_finite() {
            return Err(crate::MissionError::invalid(
                "launch_altitude_m",
                "must be finite",
            ));
        }
        if !self.min_altitude_m.is_finite() {
            return Err(crate::MissionError::invalid(
                "min_altitude_m",
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Builder for ResolverConfig
#[derive(Debug, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the projection sphere radius
    pub fn earth_radius(mut self, meters: f64) -> Self {
        self.config.earth_radius_m = meters;
        self
    }

    /// Set the home point altitude
    pub fn launch_altitude(mut self, meters: f64) -> Self {
        self.config.launch_altitude_m = meters;
        self
    }

    /// Set the altitude floor
    pub fn min_altitude(mut self, meters: f64) -> Self {
        self.config.min_altitude_m = meters;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}
