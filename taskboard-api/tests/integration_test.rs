/// Integration tests for the Taskboard API
///
/// These tests drive the full router and verify the authorization gate
/// and request validation:
/// - 401 with an empty body when no token is presented
/// - 403 with an empty body for invalid or expired tokens
/// - 403 with the exact JSON body on admin-gated routes for non-admins
/// - 400 with field details for invalid request bodies
///
/// Repository behavior that needs a live Postgres is covered by the SQL
/// schema and repository unit tests; here the database is a lazy pool
/// that is never connected.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use serde_json::{json, Value};
use taskboard_shared::auth::jwt::{create_token, Claims};
use taskboard_shared::models::user::Role;
use tower::Service as _;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_missing_token_is_401_with_empty_body() {
    let mut app = common::test_router();

    for path in ["/tasks", "/employees", "/dashboard"] {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = app.call(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "path {path}");
        assert!(body_bytes(response).await.is_empty(), "path {path}");
    }
}

#[tokio::test]
async fn test_garbled_token_is_403_with_empty_body() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("GET")
        .uri("/tasks")
        .header("authorization", "Bearer not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_expired_token_is_403() {
    let mut app = common::test_router();

    let claims = Claims::with_expiration(Uuid::new_v4(), Role::User, Duration::minutes(-1));
    let token = create_token(&claims, common::JWT_SECRET).unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/dashboard")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_403() {
    let mut app = common::test_router();

    let claims = Claims::new(Uuid::new_v4(), Role::Admin);
    let token = create_token(&claims, "another-secret-also-32-bytes-long!!").unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/tasks")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_admin_delete_task_gets_exact_denial_body() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/tasks/{}", Uuid::new_v4()))
        .header("authorization", common::bearer(Role::User))
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Access Denied: Admins Only!" })
    );
}

#[tokio::test]
async fn test_non_admin_delete_employee_gets_exact_denial_body() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/employees/{}", Uuid::new_v4()))
        .header("authorization", common::bearer(Role::User))
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Access Denied: Admins Only!" })
    );
}

#[tokio::test]
async fn test_admin_token_passes_both_guards() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/tasks/{}", Uuid::new_v4()))
        .header("authorization", common::bearer(Role::Admin))
        .body(Body::empty())
        .unwrap();

    // The handler then fails against the unreachable test database; the
    // gate's contract is only that an admin is let through to it.
    let response = app.call(request).await.unwrap();
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_admin_may_update_tasks() {
    let mut app = common::test_router();

    // PUT is not admin-gated: a regular user must get past the gate.
    // (It then fails against the unreachable test database.)
    let request = Request::builder()
        .method("PUT")
        .uri(format!("/tasks/{}", Uuid::new_v4()))
        .header("authorization", common::bearer(Role::User))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "status": "Completed" }).to_string()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_register_missing_password_is_400_with_field_detail() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "username": "alice" }).to_string()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["details"][0]["field"], "password");
}

#[tokio::test]
async fn test_login_missing_fields_is_400() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(json!({}).to_string()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "validation_error");
}

#[tokio::test]
async fn test_create_task_with_unknown_status_is_400() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header("authorization", common::bearer(Role::User))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "title": "Clean the archives",
                "assigned_to": Uuid::new_v4(),
                "status": "Archived"
            })
            .to_string(),
        ))
        .unwrap();

    // Rejected at deserialization: "Archived" is outside the closed enum,
    // and nothing is persisted.
    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "bad_request");
}

#[tokio::test]
async fn test_create_task_missing_title_is_400_with_field_detail() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header("authorization", common::bearer(Role::User))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "assigned_to": Uuid::new_v4() }).to_string()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["details"][0]["field"], "title");
}

#[tokio::test]
async fn test_create_employee_missing_fields_lists_each_field() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/employees")
        .header("authorization", common::bearer(Role::User))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "Ada Lovelace" }).to_string()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");

    let fields: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"role"));
}

#[tokio::test]
async fn test_list_tasks_with_unknown_status_filter_is_400() {
    let mut app = common::test_router();

    let request = Request::builder()
        .method("GET")
        .uri("/tasks?status=Archived")
        .header("authorization", common::bearer(Role::User))
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auth_routes_do_not_require_a_token() {
    let mut app = common::test_router();

    // No Authorization header: the request must reach validation (400),
    // not be bounced by the gate (401)
    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(json!({}).to_string()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
