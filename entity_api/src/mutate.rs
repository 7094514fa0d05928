use crate::error::Error;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Value,
};
use std::collections::HashMap;

/// Applies a partial update to an existing record.
///
/// Only the columns named in `update_map` are set on `active_model`; every other
/// column keeps its loaded value and is left out of the generated UPDATE.
/// Map keys that do not name a column of the entity are ignored.
///
/// # Type Parameters
///
/// * `A` - The ActiveModel of the entity being updated, e.g. `meetings::ActiveModel`
/// * `C` - The Column enum of the same entity, used to match map keys to columns
///
/// # Arguments
///
/// * `db` - A reference to the database connection
/// * `active_model` - The loaded record, converted into its active model
/// * `update_map` - Column names mapped to their new values
///
/// # Returns
///
/// The updated Model as stored after the UPDATE, or an Error if the write failed
pub async fn update<A, C>(
    db: &DatabaseConnection,
    mut active_model: A,
    update_map: UpdateMap,
) -> Result<<A::Entity as EntityTrait>::Model, Error>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    C: ColumnTrait,
    A::Entity: EntityTrait<Column = C>,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    for column in C::iter() {
        if let Some(value) = update_map.get(&column.to_string()) {
            active_model.set(column, value.clone());
        }
    }
    Ok(active_model.update(db).await?)
}

/// Column names mapped to their new values, describing a partial update.
///
/// Values are SeaORM `Value`s so one map can carry text, timestamps and nullable
/// columns alike. A key stored with `None` counts as "not provided" and leaves the
/// column untouched.
#[derive(Default, Debug)]
pub struct UpdateMap {
    map: HashMap<String, Option<Value>>,
}

impl UpdateMap {
    /// Creates a new empty UpdateMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `key`, treating a stored `None` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).and_then(|opt| opt.as_ref())
    }

    /// Inserts a value for column `key`.
    ///
    /// If the key already exists, the value will be overwritten.
    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }

    /// True when no column carries a value to write.
    pub fn is_empty(&self) -> bool {
        self.map.values().all(Option::is_none)
    }
}

/// Conversion from endpoint parameters into an [`UpdateMap`].
///
/// Implemented by request parameter types in the web layer so that only the
/// fields a client actually sent end up in the UPDATE.
pub trait IntoUpdateMap {
    fn into_update_map(self) -> UpdateMap;
}
