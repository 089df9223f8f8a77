// src/api/http/router.rs
// HTTP router composition for the interview endpoints

use std::str::FromStr;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{get_session, get_sessions, list_jobs, ping, save_answer, start_interview};
use crate::config::InterviewConfig;
use crate::state::AppState;

/// Split a comma-separated config value, keeping entries that parse and
/// warning about the ones that do not.
fn parse_cors_list<T: FromStr>(raw: &str, what: &str) -> Vec<T> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| match item.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!("ignoring invalid CORS {}: {:?}", what, item);
                None
            }
        })
        .collect()
}

/// Build the CORS layer from configuration. A lone `*` origin opens the
/// API to any caller, in which case credentials stay off; anything else
/// is treated as a comma-separated allow list.
pub fn cors_layer(config: &InterviewConfig) -> CorsLayer {
    let methods: Vec<Method> = parse_cors_list(&config.cors_allowed_methods, "method");
    let headers: Vec<HeaderName> = parse_cors_list(&config.cors_allowed_headers, "header");

    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers));

    if config.cors_allowed_origins.trim() == "*" {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = parse_cors_list(&config.cors_allowed_origins, "origin");
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(config.cors_allow_credentials)
    }
}

/// Main HTTP router for liveness and interview endpoints.
pub fn http_router(state: AppState, config: &InterviewConfig) -> Router {
    Router::new()
        // Liveness
        .route("/ping", get(ping))
        // Interview lifecycle
        .route("/test/jobs", get(list_jobs))
        .route("/test/start", post(start_interview))
        .route("/test/sessions", get(get_sessions))
        .route("/test/sessions/{id}", get(get_session))
        .route("/test/answer", post(save_answer))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
