// tests/support/mod.rs
use std::sync::Arc;

use aura_core::application::services::ApplicationServices;
use aura_core::domain::article::ArticleRepository;
use aura_core::infrastructure::{database, repositories::SqliteArticleRepository};
use aura_core::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Fresh in-memory SQLite database with the schema applied. One connection
/// only: every pooled connection to `sqlite::memory:` would otherwise see its
/// own empty database.
pub async fn make_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

pub fn make_router_with_pool(pool: SqlitePool) -> Router {
    let repo: Arc<dyn ArticleRepository> = Arc::new(SqliteArticleRepository::new(pool));
    let services = Arc::new(ApplicationServices::new(repo));

    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}

pub async fn make_test_router() -> Router {
    make_router_with_pool(make_test_pool().await)
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("expected json body, got error {err}: {bytes:?}"));
    (status, json)
}
