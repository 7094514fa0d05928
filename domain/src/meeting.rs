//! Meeting records and the audio processing pipeline.
//!
//! [`process_audio`] runs one upload through four stages: look the meeting up, transcribe
//! the audio, analyze the transcript, then write every processing field back in a single
//! update and re-read the record. Only a missing meeting or a storage failure aborts the
//! run; provider failures are recovered with [`AnalysisResult::fallback`].

use crate::analysis;
use crate::error::Error;
use crate::meetings::Model;
use crate::{meetings, Id, IntoUpdateMap};
use async_trait::async_trait;
use entity_api::error::EntityApiErrorKind;
use entity_api::{meeting, mutate};
use log::*;
use meeting_ai::traits::{analysis::Provider as AnalysisProvider, transcription};
use meeting_ai::AnalysisResult;
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::meeting::{ProcessingFields, MAX_LISTED_MEETINGS};

/// Resolves a client-supplied meeting id. Ids are opaque to callers, so a string that
/// cannot name any meeting is reported as not found rather than as malformed input.
pub fn parse_id(raw: &str) -> Result<Id, Error> {
    Id::parse_str(raw.trim()).map_err(|_| {
        debug!("No meeting can carry id {raw:?}");
        Error::not_found()
    })
}

pub async fn create(
    db: &DatabaseConnection,
    title: String,
    description: Option<String>,
) -> Result<Model, Error> {
    Ok(meeting::create(db, title, description).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Ok(meeting::find_by_id(db, id).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(meeting::find_all(db).await?)
}

/// Updates the user-editable fields of a meeting (title, description).
pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing_meeting = meeting::find_by_id(db, id).await?;
    let update_map = params.into_update_map();
    if update_map.is_empty() {
        return Ok(existing_meeting);
    }

    Ok(mutate::update::<meetings::ActiveModel, meetings::Column>(
        db,
        existing_meeting.into_active_model(),
        update_map,
    )
    .await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    Ok(meeting::delete_by_id(db, id).await?)
}

/// The storage operations the processing pipeline needs.
#[async_trait]
pub trait MeetingStore: Send + Sync {
    /// Returns `Ok(None)` when no meeting carries `id`.
    async fn find(&self, id: Id) -> Result<Option<Model>, Error>;

    /// Overwrites all processing fields of meeting `id` in one atomic write.
    async fn update_processing_fields(
        &self,
        id: Id,
        fields: ProcessingFields,
    ) -> Result<(), Error>;
}

#[async_trait]
impl MeetingStore for DatabaseConnection {
    async fn find(&self, id: Id) -> Result<Option<Model>, Error> {
        match meeting::find_by_id(self, id).await {
            Ok(meeting) => Ok(Some(meeting)),
            Err(err) if err.error_kind == EntityApiErrorKind::RecordNotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn update_processing_fields(
        &self,
        id: Id,
        fields: ProcessingFields,
    ) -> Result<(), Error> {
        Ok(meeting::update_processing_fields(self, id, fields).await?)
    }
}

/// An uploaded audio file. The bytes are passed to the transcriber and never stored.
#[derive(Debug, Clone, Default)]
pub struct AudioUpload {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Transcribes and analyzes `upload`, stores the outcome on meeting `id` and returns the
/// updated meeting.
///
/// Fails with a not-found error, without calling any provider or writing anything, when
/// the meeting does not exist. Re-processing a meeting overwrites the previous results.
pub async fn process_audio<S>(
    store: &S,
    transcriber: &dyn transcription::Provider,
    llm: &dyn AnalysisProvider,
    id: Id,
    upload: AudioUpload,
) -> Result<Model, Error>
where
    S: MeetingStore + ?Sized,
{
    if store.find(id).await?.is_none() {
        debug!("Meeting with id {id} not found, skipping audio processing");
        return Err(Error::not_found());
    }

    let filename = upload.filename.as_deref().unwrap_or_default();
    info!(
        "Processing audio for meeting {id}: {filename:?} ({} bytes)",
        upload.bytes.len()
    );

    let (transcription, analysis) = match transcriber.transcribe(&upload.bytes, filename).await {
        Ok(transcript) => {
            let analysis = analysis::analyze(llm, &transcript).await;
            (Some(transcript), analysis)
        }
        Err(err) => {
            warn!("Transcription failed for meeting {id}, storing fallback analysis: {err}");
            (None, AnalysisResult::fallback(&err))
        }
    };

    let fields = ProcessingFields {
        audio_filename: upload.filename,
        transcription,
        summary: analysis.summary,
        action_items: analysis.action_items,
        key_decisions: analysis.key_decisions,
        speakers: analysis.speakers,
        processed_at: chrono::Utc::now().into(),
    };
    store.update_processing_fields(id, fields).await?;

    store.find(id).await?.ok_or_else(Error::not_found)
}
