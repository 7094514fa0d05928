use crate::controller::ApiResponse;
use crate::params::meeting::{AudioUploadForm, CreateParams, UpdateParams};
use crate::{AppState, Error};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::meeting::{self as MeetingApi, AudioUpload};
use domain::meetings;
use serde_json::json;

use log::*;

/// Multipart field carrying the uploaded audio file.
pub(crate) const AUDIO_FIELD: &str = "audio_file";

/// POST create a new Meeting
#[utoipa::path(
    post,
    path = "/api/meetings",
    request_body = CreateParams,
    responses(
        (status = 201, description = "Successfully created a new Meeting", body = meetings::Model),
        (status = 422, description = "Unprocessable Entity"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Meeting from: {params:?}");

    let meeting =
        MeetingApi::create(app_state.db_conn_ref(), params.title, params.description).await?;

    debug!("New Meeting: {meeting:?}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), meeting)),
    ))
}

/// GET all Meetings, most recently created first
#[utoipa::path(
    get,
    path = "/api/meetings",
    responses(
        (status = 200, description = "Successfully retrieved Meetings", body = [meetings::Model]),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET all Meetings");

    let meetings = MeetingApi::find_all(app_state.db_conn_ref()).await?;

    debug!("Found {} Meetings", meetings.len());

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), meetings)))
}

/// GET a particular Meeting specified by its id.
#[utoipa::path(
    get,
    path = "/api/meetings/{id}",
    params(
        ("id" = String, Path, description = "Meeting id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Meeting by its id", body = meetings::Model),
        (status = 404, description = "Meeting not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn read(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Meeting by id: {id}");

    let id = MeetingApi::parse_id(&id)?;
    let meeting = MeetingApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), meeting)))
}

/// PUT update the title and/or description of a Meeting
#[utoipa::path(
    put,
    path = "/api/meetings/{id}",
    params(
        ("id" = String, Path, description = "Id of Meeting to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated a Meeting", body = meetings::Model),
        (status = 400, description = "Blank title"),
        (status = 404, description = "Meeting not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(params): Json<UpdateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Meeting {id} with: {params:?}");

    let id = MeetingApi::parse_id(&id)?;
    if params.has_blank_title() {
        return Err(Error::BadRequest("Meeting title must not be blank".to_string()));
    }

    let meeting = MeetingApi::update(app_state.db_conn_ref(), id, params).await?;

    debug!("Updated Meeting: {meeting:?}");

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), meeting)))
}

/// DELETE a Meeting specified by its primary key.
#[utoipa::path(
    delete,
    path = "/api/meetings/{id}",
    params(
        ("id" = String, Path, description = "Meeting id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a certain Meeting by its id"),
        (status = 404, description = "Meeting not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE Meeting by id: {id}");

    let id = MeetingApi::parse_id(&id)?;
    MeetingApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"message": "Meeting deleted successfully"})))
}

/// POST an audio recording of a Meeting to be transcribed and analyzed.
///
/// Responds once processing finished with the updated Meeting. Transcription or analysis
/// failures still succeed, storing a fallback analysis.
#[utoipa::path(
    post,
    path = "/api/meetings/{id}/upload-audio",
    params(
        ("id" = String, Path, description = "Id of the Meeting the recording belongs to")
    ),
    request_body(content = AudioUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully processed the recording", body = meetings::Model),
        (status = 400, description = "Missing or unreadable audio_file field"),
        (status = 404, description = "Meeting not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn upload_audio(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    debug!("POST upload audio for Meeting: {id}");

    let id = MeetingApi::parse_id(&id)?;
    let upload = read_audio_field(&mut multipart).await?;

    let meeting = MeetingApi::process_audio(
        app_state.db_conn_ref(),
        app_state.transcriber.as_ref(),
        app_state.llm.as_ref(),
        id,
        upload,
    )
    .await?;

    info!("Processed audio for Meeting: {id}");

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), meeting)))
}

async fn read_audio_field(multipart: &mut Multipart) -> Result<AudioUpload, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::BadRequest(format!("Failed to read {AUDIO_FIELD}: {e}")))?;

        return Ok(AudioUpload {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(Error::BadRequest(format!(
        "Missing multipart field `{AUDIO_FIELD}`"
    )))
}
