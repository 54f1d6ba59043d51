use drymeasures::{web, MeasureStore, WebConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging (INFO by default, RUST_LOG=debug traces every endpoint hit)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("***** REST API - Cooking Converter v1.0 *****");

    if let Err(e) = run().await {
        error!("Fatal: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = WebConfig::from_env()?;

    let store = if config.seed {
        MeasureStore::seeded()
    } else {
        MeasureStore::new()
    };
    info!("Measure store ready with {} records", store.len());

    web::run_web_server(&config, store.into_shared()).await
}
