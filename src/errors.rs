use thiserror::Error;

/// Uniform failure taxonomy for the gateway. Backend clients and the registry
/// normalize failures at their point of origin; nothing backend-specific
/// crosses the router boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Caller error: unknown or unavailable provider, invalid field values.
    #[error("{0}")]
    BadRequest(String),

    /// Backend cannot currently serve (local server unconfigured or down).
    #[error("{0}")]
    Unavailable(String),

    /// Backend answered with a non-2xx status, passed through to the caller.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Network, timeout or payload failure talking to a backend.
    #[error("{0}")]
    UpstreamFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything unanticipated. The inner detail is logged server-side only;
    /// callers see a fixed generic message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status this error maps to at the API boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::BadRequest(_) => 400,
            GatewayError::Unavailable(_) => 503,
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::UpstreamFailure(_) => 502,
            GatewayError::Config(_) | GatewayError::Io(_) | GatewayError::Internal(_) => 500,
        }
    }

    /// 502-class failure with the uniform `<Provider> request failed: <detail>` message.
    pub fn upstream_failure(provider: &str, detail: impl std::fmt::Display) -> Self {
        GatewayError::UpstreamFailure(format!("{provider} request failed: {detail}"))
    }

    /// Passthrough of the backend's own HTTP status, provider-prefixed.
    pub fn upstream_status(provider: &str, status: u16, detail: &str) -> Self {
        GatewayError::Upstream {
            status,
            message: format!("{provider} API Error: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(GatewayError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(GatewayError::Unavailable("x".into()).status_code(), 503);
        assert_eq!(GatewayError::UpstreamFailure("x".into()).status_code(), 502);
        assert_eq!(GatewayError::Internal("x".into()).status_code(), 500);
        let e = GatewayError::upstream_status("OpenAI", 429, "rate limited");
        assert_eq!(e.status_code(), 429);
    }

    #[test]
    fn test_message_formats() {
        let e = GatewayError::upstream_status("OpenAI", 401, "Incorrect API key");
        assert_eq!(e.to_string(), "OpenAI API Error: Incorrect API key");

        let e = GatewayError::upstream_failure("Gemini", "connection reset");
        assert_eq!(e.to_string(), "Gemini request failed: connection reset");
    }
}
