//! Integration tests for the mission server
//!
//! These tests drive the real router in-process with `tower::ServiceExt`.

mod common;
mod generate_csv;
mod generate_kml;
