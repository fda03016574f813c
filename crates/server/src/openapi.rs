use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

/// Task as returned by the API.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDoc {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Local date-time, `YYYY-MM-DDTHH:MM:SS`
    #[schema(example = "2024-12-01T17:00:00")]
    pub due_date: Option<String>,
    #[schema(example = "High")]
    pub priority: Option<String>,
    #[schema(example = "Pending")]
    pub status: String,
}

/// Body for create and full-replacement update. `status` defaults to `Pending`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskInputDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DDTHH:MM[:SS]`; empty string means no due date
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::tasks::list,
        crate::routes::tasks::create,
        crate::routes::tasks::update,
        crate::routes::tasks::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TaskDoc,
            TaskInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "task")
    )
)]
pub struct ApiDoc;
