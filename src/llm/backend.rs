use async_trait::async_trait;

use crate::errors::GatewayError;

/// Call contract shared by every provider backend.
///
/// Invocations are stateless: each call terminates in either the generated
/// text (leading/trailing whitespace stripped) or a normalized error. No
/// retries, no state carried between calls.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        model: Option<&str>,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String, GatewayError>;

    /// Provider identifier as callers spell it (lowercase).
    fn name(&self) -> &'static str;

    /// Whether the backend can currently accept calls.
    fn available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for dyn ChatBackend + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatBackend")
            .field("name", &self.name())
            .finish()
    }
}
