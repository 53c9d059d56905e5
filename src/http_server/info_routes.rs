//! Info HTTP Routes
//!
//! Service identity, liveness, and the API smoke-test endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::config::HttpServerConfig;

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub description: String,
    pub version: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Smoke-test response
#[derive(Debug, Serialize)]
pub struct ApiTestResponse {
    pub message: String,
    pub environment: String,
}

/// Root and health routes (mounted at `/`)
pub fn info_routes(config: Arc<HttpServerConfig>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(config)
}

/// Smoke-test route (nested under the API prefix)
pub fn api_test_routes(config: Arc<HttpServerConfig>) -> Router {
    Router::new()
        .route("/test", get(api_test_handler))
        .with_state(config)
}

async fn root_handler(State(config): State<Arc<HttpServerConfig>>) -> impl IntoResponse {
    Json(RootResponse {
        message: format!("Welcome to {}", config.project_name),
        description: config.description.clone(),
        version: config.version.clone(),
    })
}

async fn health_handler(State(config): State<Arc<HttpServerConfig>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: config.version.clone(),
    };

    (StatusCode::OK, Json(response))
}

async fn api_test_handler(State(config): State<Arc<HttpServerConfig>>) -> impl IntoResponse {
    Json(ApiTestResponse {
        message: "API working correctly".to_string(),
        environment: config.environment.clone(),
    })
}
