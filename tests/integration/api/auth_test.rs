//! Authentication API integration tests
//!
//! Tests for signup, login and the hello endpoint.

use authgate::shared::{ErrorBody, MessageResponse, UserView};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{create_test_user, TestApp};

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let keys: Vec<&str> = body
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["email", "id"]);

    let view: UserView = serde_json::from_value(body).unwrap();
    assert_eq!(view.email, "test@example.com");
    assert!(uuid::Uuid::parse_str(&view.id).is_ok());
}

#[tokio::test]
async fn test_signup_then_login_binds_token_to_user() {
    let app = TestApp::new().await;

    let user = create_test_user(&app, "test@example.com", "password123").await;

    let subject = app.state.tokens.validate(&user.token).unwrap();
    assert_eq!(subject.to_string(), user.id);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new().await;
    create_test_user(&app, "test@example.com", "password123").await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "another-password"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: ErrorBody = response.json();
    assert_eq!(body.status, 409);
    assert_eq!(app.user_count().await, 1);
}

#[tokio::test]
async fn test_signup_duplicate_email_differs_in_case() {
    let app = TestApp::new().await;
    create_test_user(&app, "test@example.com", "password123").await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "email": "TEST@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_concurrent_duplicate_signups_create_one_user() {
    let app = TestApp::new().await;
    let body = serde_json::json!({
        "email": "race@example.com",
        "password": "password123"
    });

    let (first, second) = tokio::join!(
        async { app.server.post("/signup").json(&body).await },
        async { app.server.post("/signup").json(&body).await },
    );

    let mut statuses = vec![first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);
    assert_eq!(app.user_count().await, 1);
}

#[tokio::test]
async fn test_signup_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({ "email": "test@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.msg, "Missing password parameter");
    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "email": "not-an-email",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_unknown_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "password123",
            "is_admin": true
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn test_signup_rejects_non_json_body() {
    let app = TestApp::new().await;

    let response = app.server.post("/signup").text("email=test@example.com").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.msg, "Missing JSON in request");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    create_test_user(&app, "test@example.com", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body.get("jwt").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new().await;
    create_test_user(&app, "test@example.com", "password123").await;

    let wrong_password = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "wrongpassword"
        }))
        .await;
    let unknown_email = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "wrongpassword"
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status_code(), unknown_email.status_code());
    assert_eq!(wrong_password.text(), unknown_email.text());

    let body: ErrorBody = unknown_email.json();
    assert_eq!(body.msg, "bad credentials");
}

#[tokio::test]
async fn test_login_missing_email() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({ "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.msg, "Missing email parameter");
}

#[tokio::test]
async fn test_user_hello() {
    let app = TestApp::new().await;

    let response = app.server.get("/user").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MessageResponse = response.json();
    assert_eq!(body.msg, "Hello, this is your GET /user response ");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json();
    assert_eq!(body.status, 404);
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = TestApp::new().await;

    let response = app.server.get("/login").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let body: ErrorBody = response.json();
    assert_eq!(body.msg, "Method Not Allowed");
    assert_eq!(body.status, 405);
}

#[tokio::test]
async fn test_trailing_slash_is_a_different_path() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login/")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json();
    assert_eq!(body.status, 404);
}

#[tokio::test]
async fn test_login_rejects_password_sharing_first_72_bytes() {
    let app = TestApp::new().await;
    let prefix = "a".repeat(72);
    create_test_user(&app, "test@example.com", &prefix).await;

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": format!("{prefix}WRONG")
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.msg, "bad credentials");
}

#[tokio::test]
async fn test_signup_rejects_password_longer_than_72_bytes() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/signup")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": format!("{}RIGHT", "a".repeat(72))
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.user_count().await, 0);
}

#[tokio::test]
async fn test_login_blank_email_is_missing() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&serde_json::json!({
            "email": "   ",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.msg, "Missing email parameter");
}
