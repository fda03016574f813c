use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("task not found with id: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound(id) => Self::NotFound(id),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
