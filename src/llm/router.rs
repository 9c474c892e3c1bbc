use tracing::info;

use super::registry::ProviderRegistry;
use super::types::{ChatRequest, ChatResponse};
use crate::errors::GatewayError;

/// Dispatch a validated request to its provider and wrap the result.
///
/// Registry and backend failures propagate unchanged: they were normalized
/// at their point of origin, and re-wrapping here would double-prefix the
/// messages.
pub async fn route(
    registry: &ProviderRegistry,
    request: &ChatRequest,
) -> Result<ChatResponse, GatewayError> {
    let backend = registry.resolve(&request.provider)?;

    info!(
        provider = backend.name(),
        model = request.model.as_deref().unwrap_or("default"),
        max_tokens = request.max_tokens,
        "Routing chat request"
    );

    let text = backend
        .generate(
            &request.prompt,
            request.model.as_deref(),
            request.max_tokens,
            request.temperature,
        )
        .await?;

    // The model field echoes what the caller sent, the literal "default"
    // when omitted. It is not the backend's resolved model name.
    Ok(ChatResponse {
        provider: request.provider.clone(),
        model: request
            .model
            .clone()
            .unwrap_or_else(|| "default".to_string()),
        response: text,
        prompt_tokens: None,
        completion_tokens: None,
    })
}
