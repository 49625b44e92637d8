//! Health check endpoint

use axum::extract::Json;
use serde::Serialize;
use std::time::Instant;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Timestamp of the health check
    pub timestamp: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Version information
    pub version: String,
}

/// Health status
#[derive(Debug, Serialize, PartialEq, Eq)]
pub enum HealthStatus {
    /// Serving requests
    Healthy,
}

/// Application start time for uptime calculation
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Initialize the health check system
pub fn init() {
    let _ = START_TIME.set(Instant::now());
}

/// Get health status
///
/// CloudAPI is not probed here; its failures surface per query.
pub async fn health_check() -> Json<HealthResponse> {
    let start_time = START_TIME.get_or_init(Instant::now);
    let uptime = start_time.elapsed();

    Json(HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: uptime.as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
