//! HTTP surface: routing, CORS, and request tracing.

use crate::handler::{RequestHandler, NO_DATA_MESSAGE};
use crate::models::GenerationResult;
use crate::{Error, Result};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const GENERATE_PATH: &str = "/api/generate";

/// Build the router with the generate endpoint.
///
/// The body is taken as raw bytes with no size cap, so missing, malformed,
/// or oversized bodies all produce the structured payload instead of the
/// extractor's own plain-text rejection.
pub fn build(handler: RequestHandler) -> Router {
    Router::new()
        .route(GENERATE_PATH, post(generate))
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

async fn generate(
    State(handler): State<RequestHandler>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<GenerationResult>> {
    let body = body.map_err(|rejection| {
        tracing::warn!("Failed to read request body: {}", rejection);
        Error::Validation(NO_DATA_MESSAGE.to_string())
    })?;
    handler.handle(&body).await.map(Json)
}

/// Serve `router` on `addr` until the process is stopped.
pub async fn serve(router: Router, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP listening on http://{}", listener.local_addr()?);
    info!("Generate endpoint at POST {}", GENERATE_PATH);

    axum::serve(listener, router).await?;
    Ok(())
}
