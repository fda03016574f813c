#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, in_memory_config};
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory SQLite database private to the calling test.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&in_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
