use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::task::{Task, TaskFields};

/// Storage collaborator for tasks, keyed by a store-generated id.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Task>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, ServiceError>;
    /// `None` inserts under a fresh id; `Some(id)` overwrites that record.
    async fn save(&self, id: Option<i64>, fields: TaskFields) -> Result<Task, ServiceError>;
    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmTaskRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn find_all(&self) -> Result<Vec<Task>, ServiceError> {
        Ok(models::task::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, ServiceError> {
        Ok(models::task::find_by_id(&self.db, id).await?)
    }

    async fn save(&self, id: Option<i64>, fields: TaskFields) -> Result<Task, ServiceError> {
        let saved = match id {
            Some(id) => models::task::replace(&self.db, id, fields).await?,
            None => models::task::insert(&self.db, fields).await?,
        };
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::task::delete(&self.db, id).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::task::exists(&self.db, id).await?)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(models::task::count(&self.db).await?)
    }
}

/// Process-local repository for tests and `storage.backend = "memory"`.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::RwLock;

    pub struct InMemoryTaskRepository {
        tasks: RwLock<BTreeMap<i64, Task>>,
        // only ever increases, so deleted ids are never handed out again
        next_id: AtomicI64,
    }

    impl Default for InMemoryTaskRepository {
        fn default() -> Self {
            Self {
                tasks: RwLock::new(BTreeMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl InMemoryTaskRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl TaskRepository for InMemoryTaskRepository {
        async fn find_all(&self) -> Result<Vec<Task>, ServiceError> {
            let tasks = self.tasks.read().await;
            Ok(tasks.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Task>, ServiceError> {
            let tasks = self.tasks.read().await;
            Ok(tasks.get(&id).cloned())
        }

        async fn save(&self, id: Option<i64>, fields: TaskFields) -> Result<Task, ServiceError> {
            let mut tasks = self.tasks.write().await;
            let id = match id {
                Some(id) if !tasks.contains_key(&id) => return Err(ServiceError::NotFound(id)),
                Some(id) => id,
                None => self.next_id.fetch_add(1, Ordering::SeqCst),
            };
            let task = fields.with_id(id);
            tasks.insert(id, task.clone());
            Ok(task)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            let mut tasks = self.tasks.write().await;
            Ok(tasks.remove(&id).is_some())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            let tasks = self.tasks.read().await;
            Ok(tasks.contains_key(&id))
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            let tasks = self.tasks.read().await;
            Ok(tasks.len() as u64)
        }
    }
}
