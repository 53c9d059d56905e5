//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use super::config::{ConfigError, HttpServerConfig};
use super::dish_routes::{dish_routes, DishState};
use super::info_routes::{api_test_routes, info_routes};
use super::middleware::{log_requests, RequestLogSettings};
use crate::dish::DishStore;
use crate::observability::{log_event, log_event_with_fields, Event};

/// HTTP server for the dish service
pub struct HttpServer {
    config: Arc<HttpServerConfig>,
    store: Arc<DishStore>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    ///
    /// The store starts with the house menu unless `seed_house_menu` is off.
    pub fn with_config(config: HttpServerConfig) -> Result<Self, ConfigError> {
        let store = if config.seed_house_menu {
            DishStore::with_house_menu()
        } else {
            DishStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a new HTTP server around an existing store
    ///
    /// The configuration is validated first; the router cannot be built
    /// from an invalid `api_prefix`.
    pub fn with_store(
        config: HttpServerConfig,
        store: Arc<DishStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let config = Arc::new(config);
        let router = Self::build_router(config.clone(), store.clone());
        Ok(Self {
            config,
            store,
            router,
        })
    }

    /// Build the combined router with all endpoints
    fn build_router(config: Arc<HttpServerConfig>, store: Arc<DishStore>) -> Router {
        let dish_state = Arc::new(DishState::new(store));
        let log_settings = Arc::new(RequestLogSettings::new(config.debug));

        let api = Router::new()
            .merge(dish_routes(dish_state))
            .merge(api_test_routes(config.clone()));

        Router::new()
            // Root info and health check
            .merge(info_routes(config.clone()))
            // Dish routes and smoke test under the API prefix
            .nest(&config.api_prefix, api)
            .layer(
                ServiceBuilder::new()
                    .layer(middleware::from_fn_with_state(log_settings, log_requests))
                    .layer(Self::cors_layer(&config)),
            )
    }

    /// Configure CORS from config
    ///
    /// Credentials are only allowed for an explicit origin list. Wildcards
    /// cannot be combined with credentials, so that case mirrors the
    /// request's method and headers instead.
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.allows_any_origin() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the shared store
    pub fn store(&self) -> Arc<DishStore> {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;
        self.serve(listener).await
    }

    /// Serve on an already-bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let local_addr = listener.local_addr()?.to_string();
        let dishes = self.store.len().to_string();
        log_event_with_fields(
            Event::ServerListening,
            &[
                ("addr", local_addr.as_str()),
                ("api_prefix", self.config.api_prefix.as_str()),
                ("dishes", dishes.as_str()),
                ("environment", self.config.environment.as_str()),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerShutdown);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new().unwrap();
        assert_eq!(server.socket_addr(), "127.0.0.1:9500");
        assert_eq!(server.store().len(), 3);
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config).unwrap();
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_without_house_menu() {
        let config = HttpServerConfig {
            seed_house_menu: false,
            ..Default::default()
        };
        let server = HttpServer::with_config(config).unwrap();
        assert!(server.store().is_empty());
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).unwrap().router();
    }

    #[test]
    fn test_server_rejects_bad_prefix() {
        for bad in ["api", "", "/", "/api/"] {
            let config = HttpServerConfig {
                api_prefix: bad.to_string(),
                ..Default::default()
            };
            let result = HttpServer::with_config(config);
            assert!(
                matches!(result, Err(ConfigError::Invalid { field: "api_prefix", .. })),
                "prefix {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_with_store_validates_config() {
        let store = Arc::new(DishStore::with_house_menu());
        let config = HttpServerConfig {
            api_prefix: "/api/*rest".to_string(),
            ..Default::default()
        };
        assert!(HttpServer::with_store(config, store.clone()).is_err());

        let server = HttpServer::with_store(HttpServerConfig::default(), store.clone()).unwrap();
        assert!(Arc::ptr_eq(&server.store(), &store));
    }
}
