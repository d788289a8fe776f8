#![allow(clippy::disallowed_methods)]

mod common;

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use admin_core::{ApiError, BackupTarget, LogKind};
use api::{AdminApi, ApiConfig, HttpAdminClient, run_backup};

fn client(base_url: &str) -> HttpAdminClient {
    HttpAdminClient::new(ApiConfig::new(base_url).unwrap()).unwrap()
}

#[tokio::test]
async fn fetch_logs_decodes_collection_in_order() {
    let router = Router::new().route(
        "/logs",
        get(|| async {
            Json(json!([
                {"type": "instructor_request", "userId": "42", "email": "a@b.com",
                 "message": "req", "ip": "1.2.3.4", "timestamp": "2024-01-01T00:00:00Z"},
                {"type": "failed_login", "message": "bad password",
                 "ip": "10.0.0.1", "timestamp": "2024-01-02T00:00:00Z"}
            ]))
        }),
    );
    let base = common::spawn_backend(router).await;

    let logs = client(&base).fetch_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].kind, LogKind::InstructorRequest);
    assert_eq!(logs[0].user_id.as_deref(), Some("42"));
    assert_eq!(logs[1].kind, LogKind::FailedLogin);
    assert_eq!(logs[1].email, None);
}

#[tokio::test]
async fn fetch_logs_failure_status() {
    let router = Router::new().route("/logs", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = common::spawn_backend(router).await;

    let err = client(&base).fetch_logs().await.unwrap_err();
    assert_eq!(err, ApiError::status(401, None));
    assert_eq!(err.load_message(), "Failed to fetch logs");
}

#[tokio::test]
async fn fetch_logs_malformed_body_is_decode_error() {
    let router = Router::new().route("/logs", get(|| async { "not json" }));
    let base = common::spawn_backend(router).await;

    let err = client(&base).fetch_logs().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn decisions_use_the_right_method_and_path() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let approvals = seen.clone();
    let rejections = seen.clone();

    let router = Router::new()
        .route(
            "/users/:id/approve-instructor",
            post(move |Path(id): Path<String>| async move {
                approvals.lock().unwrap().push(format!("approve {id}"));
                StatusCode::CREATED
            }),
        )
        .route(
            "/users/:id/reject-instructor",
            delete(move |Path(id): Path<String>| async move {
                rejections.lock().unwrap().push(format!("reject {id}"));
                StatusCode::NO_CONTENT
            }),
        );
    let base = common::spawn_backend(router).await;
    let api = client(&base);

    api.approve_instructor("42").await.unwrap();
    api.reject_instructor("7").await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["approve 42".to_string(), "reject 7".to_string()]);
}

#[tokio::test]
async fn failure_body_message_is_extracted() {
    let router = Router::new().route(
        "/users/:id/approve-instructor",
        post(|| async { (StatusCode::FORBIDDEN, Json(json!({"message": "X"}))) }),
    );
    let base = common::spawn_backend(router).await;

    let err = client(&base).approve_instructor("42").await.unwrap_err();
    assert_eq!(err, ApiError::status(403, Some("X".into())));
}

#[tokio::test]
async fn non_json_failure_body_falls_back() {
    let router = Router::new()
        .route(
            "/backup/users",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<h1>oops</h1>") }),
        )
        .route(
            "/backup/progress",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "nope"}))) }),
        );
    let base = common::spawn_backend(router).await;
    let api = client(&base);

    assert_eq!(run_backup(&api, BackupTarget::Users).await, "Failed to backup users.");
    assert_eq!(run_backup(&api, BackupTarget::Progress).await, "Failed to backup progress.");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let base = common::closed_backend().await;
    let api = client(&base);

    let err = api.backup_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(
        run_backup(&api, BackupTarget::Progress).await,
        "An error occurred while backing up progress."
    );
    assert!(api.fetch_logs().await.is_err());
}

#[tokio::test]
async fn session_cookie_is_sent_back() {
    let router = Router::new()
        .route(
            "/backup/users",
            post(|| async { ([(header::SET_COOKIE, "sid=abc123; Path=/")], StatusCode::OK).into_response() }),
        )
        .route(
            "/logs",
            get(|headers: HeaderMap| async move {
                let has_session = headers
                    .get(header::COOKIE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|c| c.contains("sid=abc123"));
                if has_session {
                    Json(json!([])).into_response()
                } else {
                    StatusCode::UNAUTHORIZED.into_response()
                }
            }),
        );
    let base = common::spawn_backend(router).await;
    let api = client(&base);

    assert_eq!(api.fetch_logs().await.unwrap_err(), ApiError::status(401, None));
    api.backup_users().await.unwrap();
    assert!(api.fetch_logs().await.unwrap().is_empty());
}
