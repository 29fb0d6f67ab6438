//! HTTP server: one greeting route plus a health check
//!
//! The greeting embeds the same shared constant the client renders, which
//! is the whole point of the sample's server half.

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::info;

use crate::shared;

/// Build the application router.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/api/health", get(health_check))
}

/// GET / - the greeting with the shared message
async fn greeting() -> String {
    format!("Hello World: {}", shared::SHARED_MESSAGE)
}

/// GET /api/health - liveness check
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting_embeds_shared_message() {
        let body = greeting().await;
        assert_eq!(body, format!("Hello World: {}", shared::SHARED_MESSAGE));
    }

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
