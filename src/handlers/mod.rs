use axum::{http::StatusCode, Json};

use crate::models::{HealthResponse, RootResponse};

pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::now()))
}

pub async fn root() -> (StatusCode, Json<RootResponse>) {
    (StatusCode::OK, Json(RootResponse::default()))
}
