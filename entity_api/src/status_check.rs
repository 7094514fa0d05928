//! Create and list operations for the legacy status_checks table.

use super::error::Error;
use entity::status_checks::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, QuerySelect};

/// Upper bound on the number of status checks returned by [`find_all`].
pub const MAX_LISTED_STATUS_CHECKS: u64 = 1000;

pub async fn create(db: &DatabaseConnection, client_name: String) -> Result<Model, Error> {
    debug!("Recording status check from client: {client_name}");

    let active_model = ActiveModel {
        id: Set(Id::new_v4()),
        client_name: Set(client_name),
        timestamp: Set(chrono::Utc::now().into()),
    };

    Ok(active_model.insert(db).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_asc(Column::Timestamp)
        .limit(MAX_LISTED_STATUS_CHECKS)
        .all(db)
        .await?)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_returns_the_inserted_status_check() -> Result<(), Error> {
        let status_check = Model {
            id: Id::new_v4(),
            client_name: "frontend".to_string(),
            timestamp: chrono::Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![status_check.clone()]])
            .into_connection();

        let created = create(&db, "frontend".to_string()).await?;

        assert_eq!(created, status_check);
        Ok(())
    }
}
