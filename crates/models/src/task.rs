use sea_orm::{
    entity::prelude::*, ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, NotSet,
    PaginatorTrait, QueryOrder, Set, Unchanged,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Status given to a task when the caller supplies none.
pub const DEFAULT_STATUS: &str = "Pending";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_optional")]
    pub due_date: Option<DateTime>,
    pub priority: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Task = Model;

/// Every column except the primary key. An update replaces all of them at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime>,
    pub priority: Option<String>,
    pub status: String,
}

impl Default for TaskFields {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            due_date: None,
            priority: None,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl TaskFields {
    pub fn with_id(self, id: i64) -> Model {
        Model {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
        }
    }

    fn into_active_model(self, id: ActiveValue<i64>) -> ActiveModel {
        ActiveModel {
            id,
            title: Set(self.title),
            description: Set(self.description),
            due_date: Set(self.due_date),
            priority: Set(self.priority),
            status: Set(self.status),
        }
    }
}

impl Model {
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            priority: self.priority.clone(),
            status: self.status.clone(),
        }
    }
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, ModelError> {
    let found = Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Insert a new row; the id comes from the database.
pub async fn insert<C: ConnectionTrait>(db: &C, fields: TaskFields) -> Result<Model, ModelError> {
    let am = fields.into_active_model(NotSet);
    let created = am.insert(db).await?;
    Ok(created)
}

/// Overwrite every mutable column of row `id`.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    id: i64,
    fields: TaskFields,
) -> Result<Model, ModelError> {
    let am = fields.into_active_model(Unchanged(id));
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ModelError::NotFound(id),
        other => other.into(),
    })
}

/// Returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    let n = Entity::find().count(db).await?;
    Ok(n)
}
