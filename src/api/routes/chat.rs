use axum::{extract::State, Json};

use crate::api::AppState;
use crate::errors::GatewayError;
use crate::llm::types::{ChatRequest, ChatResponse};
use crate::llm::router;

/// Unified endpoint for all providers: validate, resolve, dispatch, wrap.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, GatewayError> {
    request.validate()?;
    let response = router::route(&state.registry, &request).await?;
    Ok(Json(response))
}
