//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use std::sync::Arc;

use anyhow::Context;
use auth::{InMemorySessionRepository, SessionGate};
use axum::http::{Method, header};
use kernel::notify::NotificationBuffer;
use review::{InMemorySubmissionRepository, SubmissionStore};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppState, build_router};
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,review=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Notifications go to the log and to the feed drained by the panel
    let notifications = NotificationBuffer::default();

    let seed = match &config.seed_path {
        Some(path) => review::infra::load_seed_file(path)
            .await
            .with_context(|| format!("failed to load seed from {}", path.display()))?,
        None => review::infra::reference_seed().context("built-in seed is invalid")?,
    };
    tracing::info!(submissions = seed.len(), "Submission collection seeded");

    let store = SubmissionStore::new(
        InMemorySubmissionRepository::new(seed)?,
        Arc::new(notifications.clone()),
    );

    let gate = SessionGate::new(
        InMemorySessionRepository::new(),
        config.auth.clone(),
        Arc::new(notifications.clone()),
    );

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = build_router(AppState {
        gate: Arc::new(gate),
        store: Arc::new(store),
        notifications,
    })
    .layer(TraceLayer::new_for_http())
    .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
