pub mod anthropic;
pub mod backend;
pub mod gemini;
pub mod ollama;
pub mod openai;
pub mod registry;
pub mod router;
pub mod types;

pub use backend::ChatBackend;
pub use registry::ProviderRegistry;
pub use types::{ChatRequest, ChatResponse};

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::errors::GatewayError;

/// Connection-establishment budget for every outbound backend call.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Total budget for every outbound backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for all providers. Connections are reused across
/// requests; the two timeouts bound worst-case resource hold time.
pub fn build_http_client() -> Result<Client, GatewayError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {e}")))
}

/// Pull the backend's own `error.message` out of a non-2xx body, if present.
/// OpenAI, Anthropic and Gemini all use this shape.
pub(crate) async fn error_detail(resp: reqwest::Response) -> Option<String> {
    let data: Value = resp.json().await.ok()?;
    data["error"]["message"].as_str().map(str::to_string)
}
