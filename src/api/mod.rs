//! HTTP surface: a single route.

use axum::{routing::any, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

pub mod health;

/// Build the service router.
///
/// `/health` answers every method. Anything else falls through to axum's
/// default empty 404.
pub fn router() -> Router {
    Router::new()
        .route(health::HEALTH_PATH, any(health::health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
}
