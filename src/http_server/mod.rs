//! # HTTP Server Module
//!
//! Axum server exposing the dish store over HTTP.
//!
//! # Endpoints
//!
//! - `/` - Service info
//! - `/health` - Health check
//! - `{api_prefix}/dishes` - Dish CRUD (prefix defaults to `/api/v1`)
//! - `{api_prefix}/test` - API smoke test

pub mod config;
pub mod dish_routes;
pub mod errors;
pub mod info_routes;
pub mod middleware;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use middleware::REQUEST_ID_HEADER;
pub use server::HttpServer;
