//! Geographic location types and spherical geodesy

use serde::{Deserialize, Serialize};

/// Geographic location on the projection sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Project a great-circle path from this location.
    ///
    /// `bearing_deg` is measured clockwise from true north and `distance_m`
    /// is the ground distance on a sphere of `radius_m`. The returned
    /// longitude is wrapped into [-180, 180). The formula degenerates at the
    /// poles.
    pub fn destination(&self, bearing_deg: f64, distance_m: f64, radius_m: f64) -> Location {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let theta = bearing_deg.to_radians();
        let delta = distance_m / radius_m;

        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_delta, cos_delta) = delta.sin_cos();

        let sin_lat2 = sin_lat1 * cos_delta + cos_lat1 * sin_delta * theta.cos();
        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

        let y = theta.sin() * sin_delta * cos_lat1;
        let x = cos_delta - sin_lat1 * lat2.sin();
        let lon2 = lon1 + y.atan2(x);

        Location {
            latitude: lat2.to_degrees(),
            longitude: normalize_longitude(lon2.to_degrees()),
        }
    }

    /// Calculate distance to another location in meters (Haversine formula)
    pub fn distance_to(&self, other: &Location, radius_m: f64) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        radius_m * c
    }
}

/// Wrap a longitude into [-180, 180)
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Wrap a heading into [0, 360)
pub fn normalize_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(360.0);
    if h >= 360.0 {
        h - 360.0
    } else {
        h
    }
}
