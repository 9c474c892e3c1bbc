use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;

/// Health check with per-provider availability. The ollama host is reported
/// only while that provider is enabled.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let providers: serde_json::Map<String, Value> = state
        .registry
        .availability()
        .into_iter()
        .map(|(name, available)| (name.to_string(), Value::Bool(available)))
        .collect();

    let ollama_host = state
        .settings
        .ollama_available()
        .then(|| state.settings.ollama_host.clone());

    Json(json!({
        "status": "healthy",
        "providers": providers,
        "ollama_host": ollama_host,
    }))
}
