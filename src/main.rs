mod config;
mod db;
mod entities;
mod error;
mod itunes;
mod models;
mod routes;
mod search;
mod store;
mod templates;
#[cfg(test)]
mod testing;

use std::{sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, itunes::ItunesClient, store::PodcastStore};

#[derive(Clone)]
pub struct AppState {
    pub itunes: Arc<ItunesClient>,
    pub store: PodcastStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/podcasts", get(routes::search_page))
        .route("/podcasts/results", get(routes::results))
        .route("/api/podcasts/search", get(routes::api_search))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any)),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,podsearch=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder().user_agent("podsearch/0.1").build()?;
    let itunes = ItunesClient::new(
        http,
        config.itunes_base_url.clone(),
        Duration::from_secs(config.itunes_timeout_secs),
    );

    let store = PodcastStore::open(&config.database_url).await?;

    let state = Arc::new(AppState { itunes: Arc::new(itunes), store: store.clone() });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).with_graceful_shutdown(shutdown_signal()).await?;

    store.close().await?;
    tracing::info!("store closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
