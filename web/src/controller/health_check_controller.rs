use crate::controller::ApiResponse;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// GET API banner
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "API name")
    )
)]
pub async fn root() -> impl IntoResponse {
    Json(ApiResponse::new(
        StatusCode::OK.into(),
        json!({"message": "Meeting Summarizer API"}),
    ))
}

/// GET liveness of the API router
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = String),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "healthy")
}
