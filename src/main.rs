use anyhow::Result;
use sentiment_gateway::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first; logging is not up yet, so failures go to stderr.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    if log_level.parse::<LevelFilter>().is_err() {
        eprintln!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            log_level
        );
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .json()
        .init();

    info!(
        "Starting sentiment analysis gateway with log level: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}
