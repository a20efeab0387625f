use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::OnceLock;
use std::time::Instant;

use crate::AppState;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Call once on startup so uptime is measured from boot.
pub fn init_start_time() {
    let _ = START_TIME.get_or_init(Instant::now);
}

fn uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": uptime_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(liveness_check))
}
