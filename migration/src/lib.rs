pub use sea_orm_migration::prelude::*;

use sea_orm_migration::sea_orm::DatabaseConnection;

mod m20261019_000001_create_meeting_summarizer_schema;

/// Schema that holds both the application tables and the migration bookkeeping table.
const SCHEMA_NAME: &str = "meeting_summarizer";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20261019_000001_create_meeting_summarizer_schema::Migration,
        )]
    }
}

/// Creates the application schema when missing, then applies all pending migrations.
///
/// The schema has to exist before `Migrator::up` runs because the connection's
/// search path points at it and the migrator creates its own table there.
pub async fn run(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(&format!("CREATE SCHEMA IF NOT EXISTS {SCHEMA_NAME}"))
        .await?;
    Migrator::up(db, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_migration_is_registered() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["m20261019_000001_create_meeting_summarizer_schema".to_string()]
        );
    }
}
