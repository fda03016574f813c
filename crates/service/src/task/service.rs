use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::task::domain::TaskInput;
use crate::task::repository::TaskRepository;
use models::task::Task;

/// Application service encapsulating the task lifecycle.
/// Existence checks live here; id generation and storage stay in the repository.
pub struct TaskService<R: TaskRepository + ?Sized = dyn TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository + ?Sized> TaskService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Task>, ServiceError> {
        self.repo.find_all().await
    }

    /// Persist a new task under a store-assigned id.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: TaskInput) -> Result<Task, ServiceError> {
        let created = self.repo.save(None, input.into_fields()).await?;
        info!(id = created.id, status = %created.status, "task_created");
        Ok(created)
    }

    /// Replace every mutable field of task `id` with the payload values.
    /// Fields absent from the payload are cleared; nothing is created when `id` is unknown.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: TaskInput) -> Result<Task, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            warn!(id, "update_target_missing");
            return Err(ServiceError::NotFound(id));
        };
        let fields = input.into_fields();
        if existing.status != fields.status {
            info!(id, from = %existing.status, to = %fields.status, "task_status_changed");
        }
        self.repo.save(Some(existing.id), fields).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            warn!(id, "delete_target_missing");
            return Err(ServiceError::NotFound(id));
        }
        if !self.repo.delete_by_id(id).await? {
            // removed by a concurrent request after the existence check
            return Err(ServiceError::NotFound(id));
        }
        info!(id, "task_deleted");
        Ok(())
    }
}
