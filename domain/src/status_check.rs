use crate::error::Error;
use crate::status_checks::Model;
use entity_api::status_check;
use sea_orm::DatabaseConnection;

pub use entity_api::status_check::MAX_LISTED_STATUS_CHECKS;

pub async fn create(db: &DatabaseConnection, client_name: String) -> Result<Model, Error> {
    Ok(status_check::create(db, client_name).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(status_check::find_all(db).await?)
}
