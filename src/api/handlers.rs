use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};

use crate::{
    state::AppState,
    types::{HealthResponse, ShortenRequest, ShortenResponse},
    utils::generate_short_id,
};

const SERVICE_NAME: &str = "shortly";

#[instrument(skip(state))]
pub async fn service_info(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let response = json!({
        "service": SERVICE_NAME,
        "version": state.version,
        "environment": state.environment,
        "status": "running",
    });
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(health_report("healthy", &state)))
}

#[instrument(skip(state))]
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(health_report("ready", &state)))
}

fn health_report(status: &'static str, state: &AppState) -> HealthResponse {
    HealthResponse {
        status,
        environment: state.environment.clone(),
        version: state.version.clone(),
        timestamp: Utc::now(),
    }
}

// Decodes the body itself rather than going through the `Json` extractor:
// a missing Content-Type header must not reject an otherwise valid body.
#[instrument(skip(state, body))]
pub async fn create_short_url(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let payload: ShortenRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %e, "JSON parsing error");
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    if payload.url.is_empty() {
        error!("Shorten request without a url field");
        return (StatusCode::BAD_REQUEST, "URL is required").into_response();
    }

    let short_id = generate_short_id();
    debug!(short_id = %short_id, "Generated short id");

    let short_url = format!("{}/{}", state.base_url, short_id);
    info!(short_url = %short_url, "Created short URL");
    let response = ShortenResponse {
        short_id,
        original_url: payload.url,
        short_url,
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

#[instrument]
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Fallback for every unmatched request. No mapping is stored, so any
/// would-be short identifier resolves to not found.
#[instrument]
pub async fn short_url_not_found(uri: Uri) -> (StatusCode, &'static str) {
    debug!(path = %uri.path(), "No short URL mapping");
    (StatusCode::NOT_FOUND, "Short URL not found")
}
