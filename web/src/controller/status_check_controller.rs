use crate::controller::ApiResponse;
use crate::params::status_check::CreateParams;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::status_check as StatusCheckApi;
use domain::status_checks;

use log::*;

/// POST record a client status check
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = CreateParams,
    responses(
        (status = 200, description = "Recorded the status check", body = status_checks::Model),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST status check from: {}", params.client_name);

    let status_check = StatusCheckApi::create(app_state.db_conn_ref(), params.client_name).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), status_check)))
}

/// GET all recorded status checks
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Recorded status checks", body = [status_checks::Model]),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let status_checks = StatusCheckApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), status_checks)))
}
