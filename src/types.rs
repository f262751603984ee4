use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    // defaults to empty so a `{}` body parses and gets the
    // "URL is required" answer instead of a decode error
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub original_url: String,
    pub short_url: String,
}
