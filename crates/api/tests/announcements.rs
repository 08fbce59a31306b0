//! End-to-end tests for the announcement endpoints, driven through the
//! router against an in-memory document store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use campus_api::{AppState, router};
use campus_core::{AnnouncementService, AuthService};
use campus_db::{DocumentStore, MemoryStore};
use campus_db::repositories::{AnnouncementRepository, TeacherRepository};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

    let teacher_repo = TeacherRepository::new(Arc::clone(&store));
    teacher_repo
        .create("jdoe".to_string(), Some("Jordan Doe".to_string()))
        .await
        .unwrap();

    let announcement_repo = AnnouncementRepository::new(Arc::clone(&store));

    let state = AppState {
        announcement_service: AnnouncementService::new(announcement_repo),
        auth_service: AuthService::new(teacher_repo),
    };

    router().with_state(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_announcement(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/announcements?username=jdoe", body))
        .await
        .unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

#[tokio::test]
async fn test_create_returns_full_record_with_assigned_id() {
    let app = test_app().await;

    let (status, body) = create_announcement(
        &app,
        json!({
            "message": "Picture day",
            "expiration_date": "2025-01-10T00:00:00",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["message"], "Picture day");
    assert_eq!(body["start_date"], Value::Null);
    assert_eq!(body["expiration_date"], "2025-01-10T00:00:00");
    assert_eq!(body["created_by"], "jdoe");
}

#[tokio::test]
async fn test_create_then_list_round_trips() {
    let app = test_app().await;

    let (_, created) = create_announcement(
        &app,
        json!({
            "message": "Science fair",
            "expiration_date": "2999-06-01T00:00:00",
            "start_date": "2025-01-01T00:00:00",
        }),
    )
    .await;

    let response = app.clone().oneshot(get_request("/announcements")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = response_json(response).await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_create_without_expiration_is_rejected_and_persists_nothing() {
    let app = test_app().await;

    let (status, body) = create_announcement(&app, json!({"message": "Oops"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let response = app.clone().oneshot(get_request("/announcements")).await.unwrap();
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_unknown_username_is_unauthorized() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/announcements?username=ghost",
            json!({"message": "x", "expiration_date": "2999-01-01T00:00:00"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_username_is_unauthorized_on_update_and_delete() {
    let app = test_app().await;

    let (_, created) = create_announcement(
        &app,
        json!({"message": "Keep", "expiration_date": "2999-01-01T00:00:00"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/announcements/{id}?username=ghost"),
            json!({"message": "Hijacked"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/announcements/{id}?username=ghost"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The record is untouched
    let response = app.clone().oneshot(get_request("/announcements")).await.unwrap();
    assert_eq!(response_json(response).await, json!([created]));
}

#[tokio::test]
async fn test_missing_username_is_unauthorized() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/announcements",
            json!({"message": "x", "expiration_date": "2999-01-01T00:00:00"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_active_only_filters_by_date_window() {
    let app = test_app().await;

    create_announcement(
        &app,
        json!({"message": "Expired", "expiration_date": "2000-01-01T00:00:00"}),
    )
    .await;
    create_announcement(
        &app,
        json!({"message": "Current", "expiration_date": "2999-01-01T00:00:00"}),
    )
    .await;
    create_announcement(
        &app,
        json!({
            "message": "Future",
            "start_date": "2998-01-01T00:00:00",
            "expiration_date": "2999-01-01T00:00:00",
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(get_request("/announcements?active_only=true"))
        .await
        .unwrap();
    let active = response_json(response).await;
    let messages: Vec<&str> = active
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["Current"]);

    let response = app
        .clone()
        .oneshot(get_request("/announcements?active_only=false"))
        .await
        .unwrap();
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let app = test_app().await;

    let (_, created) = create_announcement(
        &app,
        json!({"message": "Old", "expiration_date": "2999-01-01T00:00:00"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/announcements/{id}?username=jdoe"),
            json!({"message": "New"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["message"], "New");
    assert_eq!(updated["expiration_date"], "2999-01-01T00:00:00");
    assert_eq!(updated["created_by"], "jdoe");
    assert_eq!(updated["id"], created["id"]);
}

#[tokio::test]
async fn test_update_with_zero_fields_is_rejected() {
    let app = test_app().await;

    let (_, created) = create_announcement(
        &app,
        json!({"message": "Keep", "expiration_date": "2999-01-01T00:00:00"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/announcements/{id}?username=jdoe"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing mutated
    let response = app.clone().oneshot(get_request("/announcements")).await.unwrap();
    assert_eq!(response_json(response).await, json!([created]));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/announcements/missing?username=jdoe",
            json!({"message": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_twice_fails_the_second_time() {
    let app = test_app().await;

    let (_, created) = create_announcement(
        &app,
        json!({"message": "Bye", "expiration_date": "2999-01-01T00:00:00"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/announcements/{id}?username=jdoe");

    let delete_request = || {
        Request::builder()
            .method("DELETE")
            .uri(&uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"message": "Announcement deleted"})
    );

    let response = app.clone().oneshot(delete_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
