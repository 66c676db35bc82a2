pub mod handlers;

use crate::{
    Result,
    config::{Config, EnvApiKey},
    llm::OpenAiClient,
    relay::Relay,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/.netlify/functions/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

pub async fn run(config: Config) -> Result<()> {
    let client = OpenAiClient::new(&config.llm)?;
    info!("Relaying chat completions to {}", client.endpoint());

    let relay = Relay::new(
        Arc::new(client),
        Arc::new(EnvApiKey::default()),
        &config.llm,
    );

    let app = router(AppState {
        relay: Arc::new(relay),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
