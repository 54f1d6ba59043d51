//! HTTP server implementation

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::WebConfig;
use crate::store::SharedStore;
use super::handlers::{create_measure, delete_measure, get_measure, home_page, list_measures};

/// Build the application router
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/dries", get(list_measures))
        .route("/dryes", get(list_measures))
        .route("/dry", post(create_measure))
        .route("/dry/:id", get(get_measure).delete(delete_measure))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Run the web server on an already bound listener
pub async fn serve(listener: TcpListener, store: SharedStore) -> std::io::Result<()> {
    let app = build_router(store);
    axum::serve(listener, app).await
}

/// Bind the configured address and run the web server
pub async fn run_web_server(config: &WebConfig, store: SharedStore) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.addr).await?;
    info!("Web API available at http://{}", listener.local_addr()?);

    serve(listener, store).await?;

    Ok(())
}
