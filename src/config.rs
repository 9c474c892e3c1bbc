use crate::errors::GatewayError;

/// Application settings, read from the environment once at startup and shared
/// read-only afterwards. Cloud credentials are required; Ollama is optional
/// (a blank host disables the provider).
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    pub gemini_api_key: String,

    /// Endpoint of the local Ollama server. Blank disables the provider.
    pub ollama_host: String,

    pub default_openai_model: String,
    pub default_anthropic_model: String,
    pub default_gemini_model: String,
    pub default_ollama_model: String,

    /// Comma-separated origin allow-list for CORS.
    pub allowed_origins: String,
}

fn required(name: &str) -> Result<String, GatewayError> {
    std::env::var(name).map_err(|_| {
        GatewayError::Config(format!(
            "{name} is not set. Required: OPENAI_API_KEY, ANTHROPIC_API_KEY, GEMINI_API_KEY"
        ))
    })
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    pub fn from_env() -> Result<Self, GatewayError> {
        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            anthropic_api_key: required("ANTHROPIC_API_KEY")?,
            gemini_api_key: required("GEMINI_API_KEY")?,
            ollama_host: optional("OLLAMA_HOST", "http://localhost:11434"),
            default_openai_model: optional("DEFAULT_OPENAI_MODEL", "gpt-4o-mini"),
            default_anthropic_model: optional(
                "DEFAULT_ANTHROPIC_MODEL",
                "claude-3-5-sonnet-20241022",
            ),
            default_gemini_model: optional("DEFAULT_GEMINI_MODEL", "gemini-1.5-flash"),
            default_ollama_model: optional("DEFAULT_OLLAMA_MODEL", "llama3.2:3b"),
            allowed_origins: optional(
                "ALLOWED_ORIGINS",
                "http://localhost:3000,http://localhost:8000",
            ),
        })
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The local provider is enabled only when a host is configured.
    pub fn ollama_available(&self) -> bool {
        !self.ollama_host.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> Settings {
        Settings {
            openai_api_key: "sk-test".into(),
            anthropic_api_key: "sk-ant-test".into(),
            gemini_api_key: "gm-test".into(),
            ollama_host: "http://localhost:11434".into(),
            default_openai_model: "gpt-4o-mini".into(),
            default_anthropic_model: "claude-3-5-sonnet-20241022".into(),
            default_gemini_model: "gemini-1.5-flash".into(),
            default_ollama_model: "llama3.2:3b".into(),
            allowed_origins: "http://localhost:3000, http://localhost:8000,".into(),
        }
    }

    #[test]
    fn test_cors_origins_trims_and_drops_empty() {
        let settings = base_settings();
        assert_eq!(
            settings.cors_origins(),
            vec!["http://localhost:3000", "http://localhost:8000"]
        );
    }

    #[test]
    fn test_ollama_availability() {
        let mut settings = base_settings();
        assert!(settings.ollama_available());

        settings.ollama_host = "".into();
        assert!(!settings.ollama_available());

        settings.ollama_host = "   ".into();
        assert!(!settings.ollama_available());
    }
}
