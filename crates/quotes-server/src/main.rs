//! Movie Quotes Server
//!
//! Serves a small collection of movie quotes over a JSON CRUD API, backed by
//! MySQL, SQLite or an in-memory list.

mod config;
mod error;
mod extractors;
mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::storage::QuoteStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Movie Quotes Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, storage={:?}",
        config.bind_address, config.storage
    );

    let store = storage::open(&config)
        .await
        .context("Failed to initialize quote store")?;
    info!("Quote store ready with {} quotes", store.count().await?);

    let app = build_router(AppState::new(store));

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .nest("/api", api_routes())
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/quotes",
            get(handlers::quotes::list).post(handlers::quotes::create),
        )
        .route("/quotes/random", get(handlers::quotes::random))
        .route(
            "/quotes/:id",
            get(handlers::quotes::get)
                .put(handlers::quotes::update)
                .delete(handlers::quotes::delete),
        )
}
