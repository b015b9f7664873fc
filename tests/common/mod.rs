//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

pub const SCHEMA: &str = r#"
    CREATE TABLE games (id INTEGER PRIMARY KEY, title TEXT, genre TEXT, platform TEXT, rating REAL);
    CREATE TABLE players (id INTEGER PRIMARY KEY, name TEXT, username TEXT, platform TEXT, rating REAL);
    CREATE TABLE tournaments (id INTEGER PRIMARY KEY, name TEXT, gameId INTEGER, date TEXT, prizePool REAL);
"#;

/// In-memory store with no tables at all. One connection, otherwise each
/// connection would see its own empty database.
pub async fn bare_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// In-memory store with the three tables created and `seed` applied.
pub async fn seeded_pool(seed: &str) -> SqlitePool {
    let pool = bare_pool().await;
    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    if !seed.trim().is_empty() {
        sqlx::raw_sql(seed).execute(&pool).await.unwrap();
    }
    pool
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
