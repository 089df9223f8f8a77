// tests/test_helpers.rs
use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;

use interview_ai::AppState;
use interview_ai::config::InterviewConfig;
use interview_ai::store::SqliteSessionStore;

/// Build app state over a fresh in-memory SQLite database.
pub async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("create in-memory sqlite");

    let store = Arc::new(SqliteSessionStore::new(pool));
    store.init_schema().await.expect("init schema");

    AppState::with_store(store)
}

/// Config with wide-open CORS for router construction in tests.
pub fn test_config() -> InterviewConfig {
    InterviewConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: ":memory:".to_string(),
        cors_allowed_origins: "*".to_string(),
        cors_allowed_methods: "GET,POST,OPTIONS".to_string(),
        cors_allowed_headers: "Content-Type".to_string(),
        cors_allow_credentials: false,
    }
}
