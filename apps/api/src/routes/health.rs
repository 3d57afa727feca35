use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and whether the LLM evaluator is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let evaluator = if state.evaluator.is_some() {
        "ready"
    } else {
        "disabled"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-screener",
        "evaluator": evaluator,
    }))
}
