//! SeaORM Entity for the meetings table.
//! One row per meeting, holding both the user-supplied details and the
//! results of the most recent audio processing run.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::meetings::Model)]
#[sea_orm(schema_name = "meeting_summarizer", table_name = "meetings")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Id,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Original filename of the last uploaded audio file
    pub audio_filename: Option<String>,

    /// Transcript produced from the last uploaded audio file
    #[sea_orm(column_type = "Text", nullable)]
    pub transcription: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,

    pub action_items: Vec<String>,

    pub key_decisions: Vec<String>,

    pub speakers: Vec<String>,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,

    /// When the last processing run completed, successfully or with the fallback analysis
    #[serde(skip_deserializing)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub processed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
