use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;

pub const MAX_PROMPT_CHARS: usize = 10_000;
pub const MAX_TOKENS_CEILING: u32 = 4096;

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.7
}

/// Unified request schema for all providers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    /// Provider identifier, matched case-insensitively.
    pub provider: String,
    pub prompt: String,
    /// Backend default is used when omitted.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl ChatRequest {
    /// Field validation. Runs at the request layer, before any backend is
    /// resolved or called.
    pub fn validate(&self) -> Result<(), GatewayError> {
        let prompt_chars = self.prompt.chars().count();
        if prompt_chars == 0 {
            return Err(GatewayError::BadRequest("prompt must not be empty".into()));
        }
        if prompt_chars > MAX_PROMPT_CHARS {
            return Err(GatewayError::BadRequest(format!(
                "prompt must be at most {MAX_PROMPT_CHARS} characters"
            )));
        }
        if self.max_tokens < 1 || self.max_tokens > MAX_TOKENS_CEILING {
            return Err(GatewayError::BadRequest(format!(
                "max_tokens must be between 1 and {MAX_TOKENS_CEILING}"
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GatewayError::BadRequest(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }
        Ok(())
    }
}

/// Normalized response schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub provider: String,
    /// Caller-supplied model name, or the literal "default" when omitted.
    pub model: String,
    pub response: String,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
}
