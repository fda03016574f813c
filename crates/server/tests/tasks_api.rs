use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::task::{InMemoryTaskRepository, TaskRepository};
use tower::ServiceExt;

use server::routes::{self, ServerState};
use server::startup::{build_cors, build_state};

fn build_app() -> Router {
    let repo: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
    routes::build_router(ServerState::new(repo), build_cors())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn report() -> Value {
    json!({
        "title": "Write report",
        "description": "Q3 summary",
        "dueDate": "2024-12-01T17:00:00",
        "priority": "High"
    })
}

#[tokio::test]
async fn create_returns_201_with_id_and_pending() {
    let app = build_app();
    let (status, body) = send(&app, Method::POST, "/api/task", Some(report())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        json_of(&body),
        json!({
            "id": 1,
            "title": "Write report",
            "description": "Q3 summary",
            "dueDate": "2024-12-01T17:00:00",
            "priority": "High",
            "status": "Pending"
        })
    );
}

#[tokio::test]
async fn list_starts_empty() {
    let app = build_app();
    let (status, body) = send(&app, Method::GET, "/api/task", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!([]));
}

#[tokio::test]
async fn update_replaces_record() {
    let app = build_app();
    send(&app, Method::POST, "/api/task", Some(report())).await;

    let payload = json!({
        "title": "Write report",
        "dueDate": "2024-12-02T09:30",
        "priority": "Low",
        "status": "Completed"
    });
    let (status, body) = send(&app, Method::PUT, "/api/task/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_of(&body);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["dueDate"], "2024-12-02T09:30:00");
    assert_eq!(updated["status"], "Completed");

    let (_, body) = send(&app, Method::GET, "/api/task", None).await;
    assert_eq!(json_of(&body), json!([updated]));
}

#[tokio::test]
async fn update_unknown_id_is_404_with_empty_body() {
    let app = build_app();
    send(&app, Method::POST, "/api/task", Some(report())).await;

    let (status, body) = send(&app, Method::PUT, "/api/task/999", Some(report())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (_, body) = send(&app, Method::GET, "/api/task", None).await;
    assert_eq!(json_of(&body).as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn delete_then_list_and_delete_again() {
    let app = build_app();
    send(&app, Method::POST, "/api/task", Some(report())).await;
    send(&app, Method::POST, "/api/task", Some(report())).await;

    let (status, body) = send(&app, Method::DELETE, "/api/task/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, body) = send(&app, Method::GET, "/api/task", None).await;
    let all = json_of(&body);
    let ids: Vec<i64> = all.as_array().unwrap().iter().filter_map(|t| t["id"].as_i64()).collect();
    assert_eq!(ids, vec![2]);

    let (status, body) = send(&app, Method::DELETE, "/api/task/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let app = build_app();
    send(&app, Method::POST, "/api/task", Some(report())).await;
    send(&app, Method::DELETE, "/api/task/1", None).await;
    let (_, body) = send(&app, Method::POST, "/api/task", Some(report())).await;
    assert_eq!(json_of(&body)["id"], 2);
}

#[tokio::test]
async fn malformed_due_date_is_rejected() {
    let app = build_app();
    let body = json!({"title": "x", "dueDate": "soon"});
    let (status, _) = send(&app, Method::POST, "/api/task", Some(body)).await;
    assert!(status.is_client_error());
    let (_, body) = send(&app, Method::GET, "/api/task", None).await;
    assert_eq!(json_of(&body), json!([]));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = build_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/task")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn health_and_openapi() {
    let app = build_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json_of(&body)["paths"]["/api/task/{id}"].is_object());
}

#[tokio::test]
async fn full_lifecycle_on_sqlite() {
    let mut cfg = configs::AppConfig::default();
    cfg.database = models::db::in_memory_config();
    let app = routes::build_router(build_state(&cfg).await.unwrap(), build_cors());

    let (status, body) = send(&app, Method::POST, "/api/task", Some(report())).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_of(&body);
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "Pending");

    let (status, _) = send(&app, Method::PUT, "/api/task/999", Some(report())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let payload = json!({"title": "Done", "status": "Completed"});
    let (status, body) = send(&app, Method::PUT, "/api/task/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["dueDate"], Value::Null);

    let (status, _) = send(&app, Method::DELETE, "/api/task/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(&app, Method::GET, "/api/task", None).await;
    assert_eq!(json_of(&body), json!([]));
}
