mod config;
mod errors;
mod form;
mod models;
mod preview;
mod routes;
mod session;
mod state;
mod submission;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::session::spawn_session;
use crate::state::AppState;
use crate::submission::WebhookClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    match &config.pdf_webhook_url {
        Some(url) => info!("PDF webhook: {url}"),
        None => warn!("PDF_WEBHOOK_URL is not set; submissions will fail until it is"),
    }

    let webhook = WebhookClient::new(config.pdf_webhook_url.clone(), config.submit_timeout)?;
    info!(
        "PDF webhook client initialized (timeout: {}s)",
        config.submit_timeout.as_secs()
    );

    // One editor session per process; the document lives only as long as it does.
    let session = spawn_session(Arc::new(webhook));

    let state = AppState {
        session,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
