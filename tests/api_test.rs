//! Integration tests for the web front-end.
//!
//! These tests drive the router with an in-memory repository, without
//! requiring a PostgreSQL server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pg_users::api::{create_router, AppState, Views};
use pg_users::domain::{NewUser, TimestampFormat, User};
use pg_users::errors::AppResult;
use pg_users::infra::UserRepository;

// =============================================================================
// In-memory repository
// =============================================================================

/// Keeps rows in insertion order and parses the formatted timestamp back,
/// the way the database would.
struct MemoryUserRepository {
    rows: Mutex<Vec<User>>,
    timestamp_format: TimestampFormat,
}

impl MemoryUserRepository {
    fn new(timestamp_format: TimestampFormat) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            timestamp_format,
        }
    }

    fn rows(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn ensure_users_table(&self) -> AppResult<()> {
        Ok(())
    }

    async fn create_user(&self, user: &NewUser) -> AppResult<()> {
        let text = self.timestamp_format.format(&user.created_at);
        let created_at = match self.timestamp_format {
            TimestampFormat::Date => chrono::NaiveDate::parse_from_str(&text, "%m-%d-%Y")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            TimestampFormat::DateTime => {
                chrono::NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S").ok()
            }
        };

        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(User {
            id,
            username: user.username.clone(),
            password: user.password.clone(),
            created_at,
        });
        Ok(())
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        Ok(self.rows())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> (Router, AppState, Arc<MemoryUserRepository>) {
    let repo = Arc::new(MemoryUserRepository::new(TimestampFormat::DateTime));
    let state = AppState::new(repo.clone(), Arc::new(Views::new().unwrap()));
    (create_router(state.clone()), state, repo)
}

fn form_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// Route Tests
// =============================================================================

#[tokio::test]
async fn test_home_page() {
    let (app, _, _) = test_app();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/users/new"));
}

#[tokio::test]
async fn test_new_user_form() {
    let (app, _, _) = test_app();
    let (status, body) = get(app, "/users/new").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"method="post""#));
}

#[tokio::test]
async fn test_empty_user_list() {
    let (app, _, _) = test_app();
    let (status, body) = get(app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No users yet."));
}

#[tokio::test]
async fn test_form_submission_stores_one_row_and_redirects() {
    let (app, state, repo) = test_app();

    let before = chrono::Local::now().naive_local();
    let response = app
        .clone()
        .oneshot(form_request("username=alice&password=secret"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/users");

    let rows = repo.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "alice");
    assert_eq!(rows[0].password, "secret");

    // Seconds precision after formatting
    let created_at = rows[0].created_at.expect("creation time stored");
    assert!((created_at - before).num_seconds().abs() <= 1);

    let (status, body) = get(app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alice"));
    assert!(state.shutdown.reason().is_none());
}

#[tokio::test]
async fn test_form_values_are_url_decoded() {
    let (app, _, repo) = test_app();

    let response = app
        .oneshot(form_request("username=jane+doe&password=p%40ss"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let rows = repo.rows();
    assert_eq!(rows[0].username, "jane doe");
    assert_eq!(rows[0].password, "p@ss");
}

#[tokio::test]
async fn test_missing_password_is_stored_empty() {
    let (app, state, repo) = test_app();

    let response = app.oneshot(form_request("username=alice")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/users");
    let rows = repo.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "alice");
    assert_eq!(rows[0].password, "");
    assert!(state.shutdown.reason().is_none());
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let (app, _, _) = test_app();

    for body in ["username=first&password=a", "username=second&password=b"] {
        let response = app.clone().oneshot(form_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    let (_, body) = get(app, "/users").await;
    let first = body.find("first").unwrap();
    let second = body.find("second").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, state, _) = test_app();
    let (status, _) = get(app, "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state.shutdown.reason().is_none());
}
