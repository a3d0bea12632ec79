use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "medusa-commerce";
pub const API_VERSION: &str = "1.0.0";

/// Liveness payload for `GET /health`. Built per request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.123Z`
    pub timestamp: String,
    pub service: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "Medusa Commerce API".to_string(),
            status: "running".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}
