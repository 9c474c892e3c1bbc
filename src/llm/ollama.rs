use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use super::backend::ChatBackend;
use crate::errors::GatewayError;

/// Client for a local Ollama server. Unlike the cloud backends it needs no
/// credentials, only a configured host; when the host is blank every call
/// fails before any network I/O.
pub struct OllamaBackend {
    client: Client,
    host: String,
    default_model: String,
}

impl OllamaBackend {
    pub fn new(client: Client, host: &str, default_model: &str) -> Self {
        Self {
            client,
            host: host.trim().trim_end_matches('/').to_string(),
            default_model: default_model.to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    async fn generate(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, GatewayError> {
        if self.host.is_empty() {
            return Err(GatewayError::Unavailable(
                "Ollama is not configured. Set OLLAMA_HOST in .env".into(),
            ));
        }

        let model = model.unwrap_or(&self.default_model);
        info!(model = %model, "Calling Ollama");

        let body = json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": temperature,
                "num_predict": max_tokens,
            }
        });

        let resp = self
            .client
            .post(format!("{}/api/generate", self.host))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GatewayError::Unavailable(format!(
                        "Ollama server not running at {}. Start with: ollama serve",
                        self.host
                    ))
                } else {
                    GatewayError::upstream_failure("Ollama", e)
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let detail = error_detail(resp)
                .await
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(classify_error(&detail, model, &self.host));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::upstream_failure("Ollama", e))?;

        let text = data["response"]
            .as_str()
            .ok_or_else(|| GatewayError::upstream_failure("Ollama", "no response field in payload"))?;

        Ok(text.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn available(&self) -> bool {
        !self.host.is_empty()
    }
}

/// Ollama error payloads carry a top-level `error` string rather than the
/// `error.message` shape the cloud APIs use.
async fn error_detail(resp: reqwest::Response) -> Option<String> {
    let data: Value = resp.json().await.ok()?;
    data["error"].as_str().map(str::to_string)
}

/// Sort an Ollama error message into the failure classes callers can act on:
/// missing model (pull it), server down (start it), anything else (502).
fn classify_error(detail: &str, model: &str, host: &str) -> GatewayError {
    let lowered = detail.to_lowercase();
    if lowered.contains("model") && lowered.contains("not found") {
        GatewayError::BadRequest(format!(
            "Ollama model '{model}' not found. Run: ollama pull {model}"
        ))
    } else if lowered.contains("connection") || lowered.contains("refused") {
        GatewayError::Unavailable(format!(
            "Ollama server not running at {host}. Start with: ollama serve"
        ))
    } else {
        GatewayError::UpstreamFailure(format!("Ollama error: {detail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_model_not_found() {
        let err = classify_error(
            "model 'llama3.2:3b' not found, try pulling it first",
            "llama3.2:3b",
            "http://localhost:11434",
        );
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("ollama pull llama3.2:3b"));
    }

    #[test]
    fn test_classify_connection_refused() {
        let err = classify_error("connection refused", "m", "http://localhost:11434");
        assert_eq!(err.status_code(), 503);
        assert!(err.to_string().contains("ollama serve"));
    }

    #[test]
    fn test_classify_generic() {
        let err = classify_error("out of memory", "m", "http://localhost:11434");
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.to_string(), "Ollama error: out of memory");
    }
}
