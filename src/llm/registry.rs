use super::anthropic::AnthropicBackend;
use super::backend::ChatBackend;
use super::gemini::GeminiBackend;
use super::ollama::OllamaBackend;
use super::openai::OpenAiBackend;
use crate::config::Settings;
use crate::errors::GatewayError;

/// Lookup table from provider identifier to backend client.
///
/// Built once at startup and immutable afterwards; the identifier set is
/// fixed for the life of the process. Registration order is the order
/// identifiers are enumerated in error messages and the health report.
pub struct ProviderRegistry {
    backends: Vec<Box<dyn ChatBackend>>,
}

impl ProviderRegistry {
    pub fn from_settings(settings: &Settings) -> Result<Self, GatewayError> {
        let client = super::build_http_client()?;

        Ok(Self::from_backends(vec![
            Box::new(OpenAiBackend::new(
                client.clone(),
                &settings.openai_api_key,
                &settings.default_openai_model,
            )),
            Box::new(AnthropicBackend::new(
                client.clone(),
                &settings.anthropic_api_key,
                &settings.default_anthropic_model,
            )),
            Box::new(GeminiBackend::new(
                client.clone(),
                &settings.gemini_api_key,
                &settings.default_gemini_model,
            )),
            Box::new(OllamaBackend::new(
                client,
                &settings.ollama_host,
                &settings.default_ollama_model,
            )),
        ]))
    }

    pub fn from_backends(backends: Vec<Box<dyn ChatBackend>>) -> Self {
        Self { backends }
    }

    /// Case-insensitive lookup with an availability check.
    pub fn resolve(&self, name: &str) -> Result<&dyn ChatBackend, GatewayError> {
        let wanted = name.to_ascii_lowercase();

        let backend = self
            .backends
            .iter()
            .find(|b| b.name() == wanted)
            .ok_or_else(|| {
                GatewayError::BadRequest(format!(
                    "Unsupported provider: '{}'. Available: {}",
                    wanted,
                    self.provider_names().join(", ")
                ))
            })?;

        if !backend.available() {
            return Err(GatewayError::BadRequest(format!(
                "{} provider requested but not configured. Set OLLAMA_HOST in .env",
                backend.name()
            )));
        }

        Ok(backend.as_ref())
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// (identifier, available) pairs for the health report.
    pub fn availability(&self) -> Vec<(&'static str, bool)> {
        self.backends.iter().map(|b| (b.name(), b.available())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubBackend {
        name: &'static str,
        available: bool,
    }

    #[async_trait]
    impl ChatBackend for StubBackend {
        async fn generate(
            &self,
            _prompt: &str,
            _model: Option<&str>,
            _max_tokens: u32,
            _temperature: f64,
        ) -> Result<String, GatewayError> {
            Ok("stub".to_string())
        }

        fn name(&self) -> &'static str {
            self.name
        }

        fn available(&self) -> bool {
            self.available
        }
    }

    fn test_registry(ollama_available: bool) -> ProviderRegistry {
        ProviderRegistry::from_backends(vec![
            Box::new(StubBackend { name: "openai", available: true }),
            Box::new(StubBackend { name: "anthropic", available: true }),
            Box::new(StubBackend { name: "gemini", available: true }),
            Box::new(StubBackend { name: "ollama", available: ollama_available }),
        ])
    }

    #[test]
    fn test_resolve_known_providers() {
        let registry = test_registry(true);
        for name in ["openai", "anthropic", "gemini", "ollama"] {
            assert!(registry.resolve(name).is_ok(), "failed to resolve {name}");
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = test_registry(true);
        assert!(registry.resolve("OpenAI").is_ok());
        assert!(registry.resolve("ANTHROPIC").is_ok());
        assert!(registry.resolve("Gemini").is_ok());
    }

    #[test]
    fn test_unknown_provider_lists_known_set() {
        let registry = test_registry(true);
        let err = registry.resolve("mistral").unwrap_err();
        assert_eq!(err.status_code(), 400);
        let message = err.to_string();
        assert!(message.contains("Unsupported provider: 'mistral'"));
        assert!(message.contains("openai, anthropic, gemini, ollama"));
    }

    #[test]
    fn test_unavailable_provider_cites_configuration() {
        let registry = test_registry(false);
        let err = registry.resolve("ollama").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("not configured"));
        assert!(err.to_string().contains("OLLAMA_HOST"));
    }

    #[test]
    fn test_from_settings_registers_all_providers() {
        let settings = Settings {
            openai_api_key: "sk-test".into(),
            anthropic_api_key: "sk-ant-test".into(),
            gemini_api_key: "gm-test".into(),
            ollama_host: "".into(),
            default_openai_model: "gpt-4o-mini".into(),
            default_anthropic_model: "claude-3-5-sonnet-20241022".into(),
            default_gemini_model: "gemini-1.5-flash".into(),
            default_ollama_model: "llama3.2:3b".into(),
            allowed_origins: "http://localhost:3000".into(),
        };
        let registry = ProviderRegistry::from_settings(&settings).unwrap();
        assert_eq!(
            registry.provider_names(),
            vec!["openai", "anthropic", "gemini", "ollama"]
        );
        assert_eq!(
            registry.availability(),
            vec![("openai", true), ("anthropic", true), ("gemini", true), ("ollama", false)]
        );
    }
}
