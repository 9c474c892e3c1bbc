use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::api;
use crate::config::Settings;
use crate::errors::GatewayError;
use crate::llm::ProviderRegistry;

#[derive(Parser, Debug)]
#[command(
    name = "ai-router",
    about = "Unified HTTP gateway for cloud and local LLM providers",
    version
)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

pub async fn serve(cli: Cli) -> Result<(), GatewayError> {
    let settings = Settings::from_env()?;
    let registry = ProviderRegistry::from_settings(&settings)?;

    info!(providers = ?registry.provider_names(), "Unified AI router starting");
    info!(origins = ?settings.cors_origins(), "CORS origins");

    let state = api::AppState {
        registry: Arc::new(registry),
        settings: Arc::new(settings),
    };
    let app = api::build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Internal(format!("Server error: {e}")))?;

    Ok(())
}
