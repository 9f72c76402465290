//! Connectivity probe endpoint
//!
//! `GET /api/test` is what the frontend pings on startup to tell "backend
//! down" apart from "no items yet".

use axum::{Json, Router, routing::get};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct TestResponse {
    message: String,
    timestamp: String,
}

/// Create the test router
pub fn router() -> Router {
    Router::new().route("/test", get(test_backend))
}

async fn test_backend() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend is working!".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
