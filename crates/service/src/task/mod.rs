pub mod domain;
pub mod repository;
pub mod service;

pub use domain::TaskInput;
pub use models::task::{Task, TaskFields};
pub use repository::{memory::InMemoryTaskRepository, SeaOrmTaskRepository, TaskRepository};
pub use service::TaskService;
