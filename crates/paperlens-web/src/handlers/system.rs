//! Service banner and health endpoints.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::SharedState;

/// GET / — service banner.
pub async fn home(State(state): State<SharedState>) -> Json<Value> {
    let model_status = if state.model.is_some() { "Available" } else { "Heuristic mode" };
    Json(json!({
        "message": "PaperLens API - Paper Integrity Analysis",
        "status": "running",
        "endpoints": {
            "health": "/health",
            "predict": "/predict (POST)",
        },
        "model_status": model_status,
        "feature_extraction": "Advanced",
    }))
}

/// GET /health — liveness plus capability flags.
pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "model_loaded": state.model.is_some(),
        "feature_extractor_available": true,
        "timestamp": Utc::now().to_rfc3339(),
        "message": "PaperLens Backend is running",
    }))
}
