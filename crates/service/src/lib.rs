//! Service layer for the task resource.
//! - `TaskService` owns existence checks and the full-replacement update.
//! - Persistence goes through the `TaskRepository` trait so the store can be swapped.
//! - Failures are returned as `ServiceError` values, never panics.

pub mod errors;
pub mod task;
#[cfg(test)]
pub mod test_support;
