//! Shared helpers for integration tests: in-memory store, fixtures, request plumbing.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bakery_api::{app_router, ensure_tables, AppState};
use http_body_util::BodyExt;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

pub const FIXED_TS: &str = "2024-03-01 09:30:00";

/// Single-connection in-memory pool with no tables; every connection to `sqlite::memory:` is its own database.
pub async fn bare_memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn memory_pool() -> SqlitePool {
    let pool = bare_memory_pool().await;
    ensure_tables(&pool).await.unwrap();
    pool
}

pub async fn insert_bakery(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO bakeries (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(FIXED_TS)
        .bind(FIXED_TS)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_good(pool: &SqlitePool, id: i64, name: &str, price: f64, bakery_id: Option<i64>) {
    sqlx::query("INSERT INTO baked_goods (id, name, price, bakery_id) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(bakery_id)
        .execute(pool)
        .await
        .unwrap();
}

pub fn app(pool: &SqlitePool) -> Router {
    app_router(AppState::new(pool.clone()))
}

/// Helper to get response body as string
pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// GET `uri`, returning status and parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
