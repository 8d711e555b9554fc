//! # Registration Handler Tests

use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_core::Config;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use crate::server::{create_router, AppState};

/// Setup test database with schema
async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query(include_str!(
        "../../../../../../backend/migrations/20250801000000_create_registrations.sql"
    ))
    .execute(&pool)
    .await
    .expect("Failed to create registrations table");

    pool
}

fn test_app(pool: DbPool) -> Router {
    create_router(AppState {
        db: pool,
        config: Config::default(),
    })
}

fn post_register(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_register_success() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool.clone());

    // Act
    let response = app
        .oneshot(post_register(json!({
            "FullName": "Ann",
            "Email": "ann@x.co",
            "Phone": "555-123-4567",
            "Year": "2nd",
            "Branch": "CS",
            "Programming_Experience": "beginner",
            "Interests": "AI/ML, Web Dev",
            "GitHub_Profile": "",
            "boolean_before": true
        })))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Registration successful!", "saved": true})
    );

    let rows = RegistrationRepository::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].full_name, "Ann");
    assert_eq!(rows[0].programming_experience, "beginner");
    assert_eq!(rows[0].interests, "AI/ML, Web Dev");
    assert_eq!(rows[0].attended_before, "Yes");
    assert!(rows[0].created_at_utc().is_some());
}

#[tokio::test]
async fn test_register_missing_keys_default() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool.clone());

    // Act
    let response = app
        .oneshot(post_register(json!({"FullName": "Bo"})))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let rows = RegistrationRepository::list(&pool).await.unwrap();
    assert_eq!(rows[0].full_name, "Bo");
    assert_eq!(rows[0].email, "");
    assert_eq!(rows[0].attended_before, "No");
}

#[tokio::test]
async fn test_register_storage_failure() {
    // Arrange: no registrations table
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let app = test_app(pool);

    // Act
    let response = app
        .oneshot(post_register(json!({"FullName": "Ann"})))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to save registration");
}

#[tokio::test]
async fn test_register_rejects_non_json_body() {
    let pool = setup_test_db().await;
    let app = test_app(pool.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header("content-type", "application/json")
                .body(Body::from("FullName=Ann"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(RegistrationRepository::count(&pool).await.unwrap(), 0);
}
