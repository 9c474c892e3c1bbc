use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::backend::ChatBackend;
use crate::errors::GatewayError;

/// Anthropic rejects max_tokens above this, so the client clamps before
/// sending regardless of what the request layer allowed.
const MAX_TOKENS_CAP: u32 = 4096;

pub struct AnthropicBackend {
    client: Client,
    api_key: String,
    default_model: String,
    base_url: String,
}

impl AnthropicBackend {
    pub fn new(client: Client, api_key: &str, default_model: &str) -> Self {
        Self::with_base_url(client, api_key, default_model, "https://api.anthropic.com")
    }

    pub fn with_base_url(client: Client, api_key: &str, default_model: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            default_model: default_model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for AnthropicBackend {
    async fn generate(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, GatewayError> {
        let model = model.unwrap_or(&self.default_model);
        let max_tokens = max_tokens.clamp(1, MAX_TOKENS_CAP);

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let resp = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::upstream_failure("Anthropic", e))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = super::error_detail(resp)
                .await
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(GatewayError::upstream_status("Anthropic", status.as_u16(), &detail));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::upstream_failure("Anthropic", e))?;

        let content = data["content"][0]["text"]
            .as_str()
            .ok_or_else(|| GatewayError::upstream_failure("Anthropic", "no content in response"))?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}
