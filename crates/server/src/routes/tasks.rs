use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::task::{Task, TaskInput};

use crate::{errors::ApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/task", tag = "task",
    responses(
        (status = 200, description = "All tasks", body = [crate::openapi::TaskDoc]),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.list_all().await?;
    info!(count = tasks.len(), "list tasks");
    Ok(Json(tasks))
}

#[utoipa::path(
    post, path = "/api/task", tag = "task",
    request_body = crate::openapi::TaskInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TaskDoc),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<TaskInput>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let created = state.tasks.create(input).await?;
    info!(id = created.id, "created task");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/task/{id}", tag = "task",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = crate::openapi::TaskInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TaskDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>, ApiError> {
    let updated = state.tasks.update(id, input).await?;
    info!(id = updated.id, "updated task");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/task/{id}", tag = "task",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete(id).await?;
    info!(id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}
