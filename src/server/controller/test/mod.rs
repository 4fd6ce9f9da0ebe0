use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::collections::HashMap;
use test_utils::{builder::TestBuilder, factory};
use time::{Duration, OffsetDateTime};
use tower::ServiceExt;
use tower_sessions::{
    session::{Id, Record},
    SessionManagerLayer, SessionStore,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{router, state::AppState};


/// Builds the application router over the test database with a session layer.
async fn app(db: &DatabaseConnection) -> Router {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.unwrap();

    router::router()
        .with_state(AppState::new(db.clone()))
        .layer(SessionManagerLayer::new(store))
}

/// Stores a session for `user_id` and returns the cookie that selects it.
async fn login(db: &DatabaseConnection, user_id: i32) -> String {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.unwrap();

    let record = Record {
        id: Id::default(),
        data: HashMap::from([(
            "auth:user".to_string(),
            Value::String(user_id.to_string()),
        )]),
        expiry_date: OffsetDateTime::now_utc() + Duration::days(1),
    };
    store.save(&record).await.unwrap();

    format!("id={}", record.id)
}

/// Sends a GET request and returns the status with the parsed JSON body.
async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri)).await
}

/// Sends a GET request carrying a session cookie.
async fn get_as(app: Router, uri: &str, cookie: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).header(header::COOKIE, cookie)).await
}

async fn send(app: Router, request: axum::http::request::Builder) -> (StatusCode, Value) {
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
