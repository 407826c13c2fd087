//! CSV generation endpoint tests

use axum::http::StatusCode;
use mission_core::{Location, EARTH_RADIUS_M};
use serde_json::json;

use crate::common::{self, UTF8_BOM};

fn records(body: &[u8]) -> Vec<csv::StringRecord> {
    assert!(body.starts_with(UTF8_BOM), "CSV must start with a UTF-8 BOM");
    let mut reader = csv::Reader::from_reader(&body[UTF8_BOM.len()..]);
    assert_eq!(reader.headers().unwrap().len(), 16);
    reader.records().map(|r| r.unwrap()).collect()
}

#[tokio::test]
async fn test_single_leg_end_to_end() {
    let response = common::post_json(common::app(), "/api/generate", common::single_leg_request()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/csv");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=litchi_waypoints.csv"
    );

    let rows = records(&response.body);
    assert_eq!(rows.len(), 2);

    let home = &rows[0];
    assert_eq!(&home[0], "10.00000000");
    assert_eq!(&home[1], "20.00000000");
    assert_eq!(&home[2], "5.00");
    assert_eq!(&home[9], "0.00");

    let wp = &rows[1];
    let lat: f64 = wp[0].parse().unwrap();
    let lon: f64 = wp[1].parse().unwrap();
    assert!((lat - 10.0).abs() < 1e-6, "waypoint should stay on the home parallel");
    assert!(lon > 20.0, "waypoint should lie east of home");

    let distance = Location::new(10.0, 20.0).distance_to(&Location::new(lat, lon), EARTH_RADIUS_M);
    assert!((distance - 1000.0).abs() < 0.01, "distance was {}", distance);

    assert_eq!(&wp[2], "50.00");
    assert_eq!(&wp[3], "90.00");
    assert_eq!(&wp[9], "5.00");
    assert_eq!(&wp[10], "10.00000000");
    assert_eq!(&wp[11], "20.00000000");
    assert_eq!(&wp[12], "1.00");
    assert_eq!(&wp[14], "-1");
    assert_eq!(&wp[15], "-1");
}

#[tokio::test]
async fn test_alias_route_matches_generate() {
    let a = common::post_json(common::app(), "/api/generate", common::single_leg_request()).await;
    let b = common::post_json(common::app(), "/api/generate_csv", common::single_leg_request()).await;
    assert_eq!(a.status, StatusCode::OK);
    assert_eq!(a.body, b.body);
}

#[tokio::test]
async fn test_chained_legs_form_polyline() {
    let request = json!({
        "init_lat": 0.0,
        "init_lon": 0.0,
        "init_bearing": 90.0,
        "poi_altitude": 7.5,
        "waypoints": [
            { "horizontal": 500, "vertical": 20, "bearing": -90 },
            { "horizontal": 500, "vertical": 20, "bearing": -90 },
            { "horizontal": 300, "vertical": 1, "bearing": 0, "speed": 3 }
        ]
    });
    let response = common::post_json(common::app(), "/api/generate", request).await;
    assert_eq!(response.status, StatusCode::OK);

    let rows = records(&response.body);
    assert_eq!(rows.len(), 4);

    let lats: Vec<f64> = rows.iter().map(|r| r[0].parse().unwrap()).collect();
    // Relative -90 against a 90 home heading is due north for both legs
    assert_eq!(&rows[1][3], "0.00");
    assert_eq!(&rows[2][3], "0.00");
    assert!(lats[2] > lats[1] && lats[1] > lats[0]);
    // Third leg heads east from the second point, not from home
    assert_eq!(&rows[3][3], "90.00");
    assert!((lats[3] - lats[2]).abs() < 1e-6);
    // Altitude floor
    assert_eq!(&rows[3][2], "2.00");
    // POI altitude from the request
    assert!(rows.iter().all(|r| &r[12] == "7.50"));
}

#[tokio::test]
async fn test_configured_altitude_floor() {
    let mut config = mission_server::ServiceConfig::default();
    config.resolver.min_altitude_m = 30.0;

    let response = common::post_json(common::app_with(config), "/api/generate", common::single_leg_request()).await;
    let rows = records(&response.body);
    assert_eq!(&rows[1][2], "50.00");

    let mut config = mission_server::ServiceConfig::default();
    config.resolver.min_altitude_m = 80.0;
    let response = common::post_json(common::app_with(config), "/api/generate", common::single_leg_request()).await;
    let rows = records(&response.body);
    assert_eq!(&rows[1][2], "80.00");
}
