//! Trajectory resolution
//!
//! Turns relative legs into absolute mission points. Every leg's bearing is
//! measured against the fixed home heading, while its projection starts from
//! the previously resolved point, so consecutive legs form a connected
//! dead-reckoned polyline.

use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::{MissionError, Result};
use crate::location::{normalize_heading, Location};
use crate::mission::{Leg, Mission, MissionContext, MissionPoint, PointOfInterest};

/// Resolves mission contexts into absolute trajectories
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryResolver {
    config: ResolverConfig,
}

impl TrajectoryResolver {
    /// Create a resolver with the given configuration
    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a context into its ordered mission points.
    ///
    /// The result always has `legs.len() + 1` entries, the first being home.
    pub fn resolve(&self, context: &MissionContext) -> Result<Vec<MissionPoint>> {
        context.validate()?;

        // Reported in [0, 360) like every other point, not echoed raw
        let home_heading = normalize_heading(context.home_heading);
        let mut points = Vec::with_capacity(context.legs.len() + 1);
        points.push(MissionPoint {
            latitude_deg: context.home_latitude,
            longitude_deg: context.home_longitude,
            altitude_m: self.config.launch_altitude_m,
            absolute_heading_deg: home_heading,
            speed_mps: 0.0,
            hold_time_s: 0.0,
        });

        let mut origin = context.home();
        for (index, leg) in context.legs.iter().enumerate() {
            let point = self.project_leg(origin, home_heading, leg, index)?;
            origin = point.location();
            points.push(point);
        }

        debug!(
            legs = context.legs.len(),
            home_lat = context.home_latitude,
            home_lon = context.home_longitude,
            "resolved mission trajectory"
        );
        Ok(points)
    }

    /// Resolve a context into a [`Mission`] carrying its point of interest
    pub fn resolve_mission(&self, context: &MissionContext) -> Result<Mission> {
        let points = self.resolve(context)?;
        Ok(Mission {
            points,
            point_of_interest: PointOfInterest {
                latitude_deg: context.home_latitude,
                longitude_deg: context.home_longitude,
                altitude_m: context.poi_altitude_m,
            },
        })
    }

    /// Project a single location, rejecting non-finite results
    pub fn project(&self, origin: Location, bearing_deg: f64, distance_m: f64) -> Result<Location> {
        let dest = origin.destination(normalize_heading(bearing_deg), distance_m, self.config.earth_radius_m);
        if !dest.is_finite() {
            return Err(MissionError::Projection(format!(
                "({}, {}) by {} m at {} degrees is not finite",
                origin.latitude, origin.longitude, distance_m, bearing_deg
            )));
        }
        Ok(dest)
    }

    fn project_leg(&self, origin: Location, home_heading: f64, leg: &Leg, index: usize) -> Result<MissionPoint> {
        let bearing = absolute_bearing(home_heading, leg.relative_bearing_deg);
        let dest = origin.destination(bearing, leg.horizontal_distance_m, self.config.earth_radius_m);

        if !dest.is_finite() {
            return Err(MissionError::Computation {
                index,
                reason: format!("destination ({}, {}) is not finite", dest.latitude, dest.longitude),
            });
        }

        Ok(MissionPoint {
            latitude_deg: dest.latitude,
            longitude_deg: dest.longitude,
            altitude_m: leg.vertical_altitude_m.max(self.config.min_altitude_m),
            absolute_heading_deg: bearing,
            speed_mps: leg.speed_mps,
            hold_time_s: leg.hold_time_s,
        })
    }
}

/// Heading of a leg measured from true north, in [0, 360)
pub fn absolute_bearing(home_heading_deg: f64, relative_bearing_deg: f64) -> f64 {
    normalize_heading(home_heading_deg + relative_bearing_deg)
}

/// Resolve with the default configuration
pub fn resolve(context: &MissionContext) -> Result<Vec<MissionPoint>> {
    TrajectoryResolver::default().resolve(context)
}
