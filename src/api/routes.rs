use std::time::Duration;

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::state::AppState;

use super::handlers;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::service_info).fallback(handlers::short_url_not_found),
        )
        .route("/health", any(handlers::health_check))
        .route("/ready", any(handlers::readiness_check))
        .route(
            "/shorten",
            post(handlers::create_short_url).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::short_url_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .latency_unit(LatencyUnit::Millis)
                        .level(Level::DEBUG),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}
