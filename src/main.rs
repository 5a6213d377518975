use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bfhl::{config, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bfhl=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }
    let config = config::Config::from_env();

    if config.is_development() {
        tracing::warn!("Running in development mode: 500 responses include error details");
    }
    tracing::info!(
        "Rate limit: {} requests per {:?} per client",
        config.rate_limit_max,
        config.rate_limit_window
    );

    server::serve(config).await.expect("Failed to start server");
}
