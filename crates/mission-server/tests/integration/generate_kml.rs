//! KML generation endpoint tests

use axum::http::StatusCode;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::json;

use crate::common;

/// Point placemark count and path coordinate triples, failing on malformed XML
fn inspect(kml: &str) -> (usize, Vec<String>) {
    let mut reader = Reader::from_str(kml);
    reader.config_mut().trim_text(true);

    let mut points = 0;
    let mut path = Vec::new();
    let mut in_line_string = false;
    let mut in_coordinates = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"Point" => points += 1,
                b"LineString" => in_line_string = true,
                b"coordinates" => in_coordinates = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"LineString" => in_line_string = false,
                b"coordinates" => in_coordinates = false,
                _ => {}
            },
            Event::Text(t) if in_line_string && in_coordinates => {
                path = t
                    .unescape()
                    .unwrap()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    (points, path)
}

#[tokio::test]
async fn test_single_leg_end_to_end() {
    let response = common::post_json(common::app(), "/api/generate_kml", common::single_leg_request()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("content-type"),
        "application/vnd.google-earth.kml+xml"
    );
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=mission_path.kml"
    );

    let kml = response.text();
    assert!(kml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    let (points, path) = inspect(&kml);
    assert_eq!(points, 2);
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], "20,10,5");

    let wp: Vec<f64> = path[1].split(',').map(|v| v.parse().unwrap()).collect();
    assert!(wp[0] > 20.0);
    assert!((wp[1] - 10.0).abs() < 1e-6);
    assert_eq!(wp[2], 50.0);

    assert!(kml.contains("<name>Home</name>"));
    assert!(kml.contains("<name>WP 1</name>"));
}

#[tokio::test]
async fn test_csv_and_kml_agree() {
    let request = json!({
        "init_lat": -33.86,
        "init_lon": 151.21,
        "init_bearing": 45,
        "waypoints": [
            { "horizontal": 120, "vertical": 30, "bearing": 0, "speed": 4 },
            { "horizontal": 80, "vertical": 35, "bearing": 90, "speed": 4, "hold_time": 3 },
            { "horizontal": 60, "vertical": 25, "bearing": 180, "speed": 6 }
        ]
    });
    let csv_response = common::post_json(common::app(), "/api/generate", request.clone()).await;
    let kml_response = common::post_json(common::app(), "/api/generate_kml", request).await;
    assert_eq!(csv_response.status, StatusCode::OK);
    assert_eq!(kml_response.status, StatusCode::OK);

    let mut reader = csv::Reader::from_reader(&csv_response.body[common::UTF8_BOM.len()..]);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    let (points, path) = inspect(&kml_response.text());

    assert_eq!(points, 4);
    assert_eq!(rows.len(), path.len());
    for (row, triple) in rows.iter().zip(&path) {
        let kml: Vec<f64> = triple.split(',').map(|v| v.parse().unwrap()).collect();
        let lat: f64 = row[0].parse().unwrap();
        let lon: f64 = row[1].parse().unwrap();
        let alt: f64 = row[2].parse().unwrap();
        assert!((kml[0] - lon).abs() < 1e-8);
        assert!((kml[1] - lat).abs() < 1e-8);
        assert!((kml[2] - alt).abs() < 5e-3);
    }
}

#[tokio::test]
async fn test_validation_error_yields_no_document() {
    let request = json!({ "init_lat": 10.0, "init_lon": 20.0, "waypoints": [] });
    let response = common::post_json(common::app(), "/api/generate_kml", request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "EMPTY_MISSION");
}
