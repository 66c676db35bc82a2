use anyhow::Result;
use concierge_relay::{
    config::{self, ApiKeySource, EnvApiKey},
    server,
};
use tracing::{info, warn};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env may carry OPENAI_API_KEY during development
    let dotenv = dotenvy::dotenv();

    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .json()
        .init();

    info!("Starting concierge relay with log level: {}", log_level);
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    if EnvApiKey::default().api_key().is_none() {
        warn!(
            "{} is not set; chat requests will fail until it is",
            config::OPENAI_API_KEY_VAR
        );
    }

    server::run(config).await?;

    Ok(())
}
