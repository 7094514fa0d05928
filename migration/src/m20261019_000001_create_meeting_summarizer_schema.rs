use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Processing fields are overwritten as a whole on every audio upload.
        db.execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS meeting_summarizer.meetings (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                audio_filename TEXT,
                transcription TEXT,
                summary TEXT,
                action_items TEXT[] NOT NULL DEFAULT '{}',
                key_decisions TEXT[] NOT NULL DEFAULT '{}',
                speakers TEXT[] NOT NULL DEFAULT '{}',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                processed_at TIMESTAMPTZ
            )
            "#,
        )
        .await?;

        db.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS meetings_created_at_idx
                ON meeting_summarizer.meetings (created_at DESC)",
        )
        .await?;

        db.execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS meeting_summarizer.status_checks (
                id UUID PRIMARY KEY,
                client_name TEXT NOT NULL,
                timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TABLE IF EXISTS meeting_summarizer.status_checks")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS meeting_summarizer.meetings")
            .await?;

        Ok(())
    }
}
