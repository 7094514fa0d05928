//! CRUD operations for the meetings table.

use super::error::{EntityApiErrorKind, Error};
use entity::meetings::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, QuerySelect,
};

/// Upper bound on the number of meetings returned by [`find_all`].
pub const MAX_LISTED_MEETINGS: u64 = 100;

/// Everything a processing run writes back onto a meeting. Each field replaces
/// the stored value; nothing is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessingFields {
    pub audio_filename: Option<String>,
    pub transcription: Option<String>,
    pub summary: String,
    pub action_items: Vec<String>,
    pub key_decisions: Vec<String>,
    pub speakers: Vec<String>,
    pub processed_at: DateTimeWithTimeZone,
}

/// Creates a new meeting with empty processing fields
pub async fn create(
    db: &DatabaseConnection,
    title: String,
    description: Option<String>,
) -> Result<Model, Error> {
    if title.trim().is_empty() {
        warn!("Rejecting meeting with a blank title");
        return Err(Error {
            source: None,
            error_kind: EntityApiErrorKind::ValidationError,
        });
    }

    let now = chrono::Utc::now();

    let active_model = ActiveModel {
        id: Set(Id::new_v4()),
        title: Set(title),
        description: Set(description),
        audio_filename: Set(None),
        transcription: Set(None),
        summary: Set(None),
        action_items: Set(Vec::new()),
        key_decisions: Set(Vec::new()),
        speakers: Set(Vec::new()),
        created_at: Set(now.into()),
        processed_at: Set(None),
    };

    debug!("New meeting to be inserted: {active_model:?}");

    Ok(active_model.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// Finds the most recently created meetings, newest first
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .limit(MAX_LISTED_MEETINGS)
        .all(db)
        .await?)
}

/// Overwrites the processing fields of a meeting with a single UPDATE statement.
/// Fails with `RecordNotFound` when no row carries `id`.
pub async fn update_processing_fields(
    db: &DatabaseConnection,
    id: Id,
    fields: ProcessingFields,
) -> Result<(), Error> {
    debug!("Writing processing results for meeting: {id}");

    let active_model = ActiveModel {
        audio_filename: Set(fields.audio_filename),
        transcription: Set(fields.transcription),
        summary: Set(Some(fields.summary)),
        action_items: Set(fields.action_items),
        key_decisions: Set(fields.key_decisions),
        speakers: Set(fields.speakers),
        processed_at: Set(Some(fields.processed_at)),
        ..Default::default()
    };

    let result = Entity::update_many()
        .set(active_model)
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        debug!("Meeting with id {id} not found");
        return Err(Error::not_found());
    }
    Ok(())
}

/// Hard-deletes a meeting. Fails with `RecordNotFound` when no row carries `id`.
pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let result = Entity::delete_by_id(id).exec(db).await?;

    if result.rows_affected == 0 {
        debug!("Meeting with id {id} not found");
        return Err(Error::not_found());
    }
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn meeting_model() -> Model {
        Model {
            id: Id::new_v4(),
            title: "Product planning".to_string(),
            description: Some("Q2 roadmap".to_string()),
            audio_filename: None,
            transcription: None,
            summary: None,
            action_items: vec![],
            key_decisions: vec![],
            speakers: vec![],
            created_at: chrono::Utc::now().into(),
            processed_at: None,
        }
    }

    #[tokio::test]
    async fn create_returns_a_new_meeting_model() -> Result<(), Error> {
        let meeting = meeting_model();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![meeting.clone()]])
            .into_connection();

        let created = create(&db, meeting.title.clone(), meeting.description.clone()).await?;

        assert_eq!(created.title, meeting.title);
        assert!(created.action_items.is_empty());
        assert!(created.processed_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_a_blank_title_without_touching_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = create(&db, "   ".to_string(), None).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::ValidationError
        );
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_record_not_found_for_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let result = find_by_id(&db, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }

    #[tokio::test]
    async fn update_processing_fields_issues_a_single_update() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let fields = ProcessingFields {
            audio_filename: Some("standup.mp3".to_string()),
            transcription: Some("Speaker 1: hello".to_string()),
            summary: "A short standup.".to_string(),
            action_items: vec!["Ship it".to_string()],
            key_decisions: vec![],
            speakers: vec!["Speaker 1".to_string()],
            processed_at: chrono::Utc::now().into(),
        };

        update_processing_fields(&db, Id::new_v4(), fields).await?;

        assert_eq!(db.into_transaction_log().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_processing_fields_reports_missing_meeting() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let fields = ProcessingFields {
            audio_filename: None,
            transcription: None,
            summary: String::new(),
            action_items: vec![],
            key_decisions: vec![],
            speakers: vec![],
            processed_at: chrono::Utc::now().into(),
        };

        let result = update_processing_fields(&db, Id::new_v4(), fields).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }

    #[tokio::test]
    async fn delete_by_id_reports_missing_meeting() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = delete_by_id(&db, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }
}
