//! HTTP layer for Eventra.
//!
//! Exposes the router so tests can drive it without binding a socket.

pub mod routes;
pub mod state;

use axum::Router;
use eventra_core::EventraConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use state::AppState;

/// All API routes, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            routes::events::router().merge(routes::health::router()),
        )
        .with_state(state)
}

/// The router plus CORS and request tracing, as served by the binary.
pub fn app(state: AppState, config: &EventraConfig) -> Router {
    let cors = if config.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router(state).layer(cors).layer(trace)
}
