use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::backend::ChatBackend;
use crate::errors::GatewayError;

pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    default_model: String,
    base_url: String,
}

impl OpenAiBackend {
    pub fn new(client: Client, api_key: &str, default_model: &str) -> Self {
        Self::with_base_url(client, api_key, default_model, "https://api.openai.com")
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
impl ChatBackend for OpenAiBackend {
    async fn generate(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, GatewayError> {
        let model = model.unwrap_or(&self.default_model);

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::upstream_failure("OpenAI", e))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = super::error_detail(resp)
                .await
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(GatewayError::upstream_status("OpenAI", status.as_u16(), &detail));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::upstream_failure("OpenAI", e))?;

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| GatewayError::upstream_failure("OpenAI", "no content in response"))?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
