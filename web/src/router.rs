use crate::controller::{health_check_controller, meeting_controller, status_check_controller};
use crate::{params, AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Meeting Summarizer API"
        ),
        paths(
            health_check_controller::root,
            health_check_controller::health_check,
            meeting_controller::create,
            meeting_controller::index,
            meeting_controller::read,
            meeting_controller::update,
            meeting_controller::delete,
            meeting_controller::upload_audio,
            status_check_controller::create,
            status_check_controller::index,
        ),
        components(
            schemas(
                domain::meetings::Model,
                domain::status_checks::Model,
                params::meeting::CreateParams,
                params::meeting::UpdateParams,
                params::meeting::AudioUploadForm,
                params::status_check::CreateParams,
            )
        ),
        tags(
            (name = "meeting_summarizer", description = "Meeting transcription and analysis API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(meeting_routes(app_state.clone()))
        .merge(meeting_upload_routes(app_state.clone()))
        .merge(status_check_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new()
        .route("/api", get(health_check_controller::root))
        .route("/api/", get(health_check_controller::root))
        .route("/api/health", get(health_check_controller::health_check))
}

fn meeting_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/meetings",
            post(meeting_controller::create).get(meeting_controller::index),
        )
        .route(
            "/api/meetings/{id}",
            get(meeting_controller::read)
                .put(meeting_controller::update)
                .delete(meeting_controller::delete),
        )
        .with_state(app_state)
}

fn meeting_upload_routes(app_state: AppState) -> Router {
    let max_upload_bytes = app_state.config().max_upload_bytes;
    Router::new()
        .route(
            "/api/meetings/{id}/upload-audio",
            post(meeting_controller::upload_audio),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(app_state)
}

fn status_check_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/status",
            post(status_check_controller::create).get(status_check_controller::index),
        )
        .with_state(app_state)
}
