//! REST API endpoints

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use mission_core::mission::validate_coordinate;
use mission_core::{Location, MissionContext, MissionError};
use mission_export::{ExportFormat, MissionEncoder};
use serde::Serialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ApiError;
use super::messages::{MissionRequest, PointQuery, PointResponse, StatusResponse};
use crate::AppState;

/// Generate a Litchi waypoint CSV
pub async fn generate_csv(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    generate(&state, &state.csv, &body)
}

/// Generate a KML path document
pub async fn generate_kml(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    generate(&state, &state.kml, &body)
}

/// Parse, resolve and encode in one pass; nothing is sent unless all succeed
fn generate(state: &AppState, encoder: &dyn MissionEncoder, body: &[u8]) -> Result<Response, ApiError> {
    let request: MissionRequest =
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let context = MissionContext::try_from(request)?;

    let mission = state.resolver.resolve_mission(&context)?;
    let bytes = encoder.encode(&mission)?;

    state.missions_generated.fetch_add(1, Ordering::Relaxed);
    info!(
        "Generated {:?} mission: {} waypoints, {} bytes",
        encoder.format(),
        mission.leg_count(),
        bytes.len()
    );
    Ok(attachment(encoder.format(), bytes))
}

fn attachment(format: ExportFormat, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", format.file_name()),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Project a single point from query parameters
pub async fn generate_point(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PointQuery>, QueryRejection>,
) -> Result<Json<PointResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    validate_coordinate("lat", query.lat, "lon", query.lon)?;
    if !query.distance.is_finite() || query.distance < 0.0 {
        return Err(MissionError::invalid("distance", "must be a non-negative finite number").into());
    }
    if !query.bearing.is_finite() {
        return Err(MissionError::invalid("bearing", "must be a finite number").into());
    }

    let dest = state
        .resolver
        .project(Location::new(query.lat, query.lon), query.bearing, query.distance)?;
    debug!("Projected point: ({}, {})", dest.latitude, dest.longitude);

    Ok(Json(PointResponse {
        lat: dest.latitude,
        lon: dest.longitude,
    }))
}

/// CSV encoder status
pub async fn csv_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "csv generator active".to_string(),
    })
}

/// KML encoder status
pub async fn kml_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "KML generator active".to_string(),
    })
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Service info endpoint
#[derive(Serialize)]
pub struct ServiceInfo {
    pub version: &'static str,
    pub earth_radius_m: f64,
    pub launch_altitude_m: f64,
    pub min_altitude_m: f64,
    pub missions_generated: u64,
    pub uptime_seconds: u64,
}

pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    let config = state.resolver.config();
    Json(ServiceInfo {
        version: env!("CARGO_PKG_VERSION"),
        earth_radius_m: config.earth_radius_m,
        launch_altitude_m: config.launch_altitude_m,
        min_altitude_m: config.min_altitude_m,
        missions_generated: state.missions_generated.load(Ordering::Relaxed),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
