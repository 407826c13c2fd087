//! Mission Core - Relative legs to absolute drone missions
//!
//! This crate provides the data model and the trajectory resolver that turns
//! a pilot's relative flight legs into an absolute, georeferenced mission.
//!
//! # Modules
//!
//! - [`location`] - Spherical geodesy (destination point, distance, bearing)
//! - [`mission`] - Legs, mission points and the mission context
//! - [`resolver`] - Trajectory resolution
//! - [`config`] - Resolver configuration
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use mission_core::{Leg, MissionContext, TrajectoryResolver};
//!
//! let context = MissionContext::new(10.0, 20.0, vec![Leg::new(1000.0, 50.0, 90.0).with_speed(5.0)]);
//! let points = TrajectoryResolver::default().resolve(&context).unwrap();
//!
//! assert_eq!(points.len(), 2);
//! assert_eq!(points[1].absolute_heading_deg, 90.0);
//! ```

pub mod location;
pub mod mission;
pub mod resolver;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{MissionError, Result};

pub use config::{ResolverConfig, ResolverConfigBuilder, EARTH_RADIUS_M};
pub use location::{normalize_heading, normalize_longitude, Location};
pub use mission::{Leg, Mission, MissionContext, MissionPoint, PointOfInterest};
pub use resolver::{absolute_bearing, resolve, TrajectoryResolver};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
