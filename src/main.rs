use clap::Parser;
use tracing_subscriber::EnvFilter;

use ai_router::{cli, errors};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if let Err(e) = cli::serve(cli).await {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            errors::GatewayError::Config(_) => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}
