//! HTTP Server Configuration
//!
//! Configuration for the dish service: identity, bind address, CORS and the
//! API prefix.
//!
//! Values resolve in layers: defaults, then an optional JSON file, then
//! environment variables, then command-line overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {message}")]
    InvalidEnv { var: &'static str, message: String },

    #[error("Invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Service name shown on the root endpoint
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Version reported by `/` and `/health`
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 9500)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log every request, not only failures
    #[serde(default = "default_debug")]
    pub debug: bool,

    /// Free-form environment label (development, production, ...)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins; empty or containing "*" allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Prefix the dish routes are nested under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Boot with the house menu instead of an empty store
    #[serde(default = "default_seed_house_menu")]
    pub seed_house_menu: bool,
}

fn default_project_name() -> String {
    "Dish API".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_description() -> String {
    "In-memory dish catalogue over HTTP".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9500
}

fn default_debug() -> bool {
    true
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_seed_house_menu() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            version: default_version(),
            description: default_description(),
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
            environment: default_environment(),
            cors_origins: default_cors_origins(),
            api_prefix: default_api_prefix(),
            seed_house_menu: default_seed_house_menu(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|var| std::env::var(var).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PROJECT_NAME") {
            self.project_name = v;
        }
        if let Some(v) = lookup("VERSION") {
            self.version = v;
        }
        if let Some(v) = lookup("DESCRIPTION") {
            self.description = v;
        }
        if let Some(v) = lookup("HOST") {
            self.host = v;
        }
        if let Some(v) = lookup("PORT") {
            self.port = v.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT",
                message: format!("'{}' is not a valid port", v),
            })?;
        }
        if let Some(v) = lookup("DEBUG") {
            self.debug = parse_bool("DEBUG", &v)?;
        }
        if let Some(v) = lookup("ENVIRONMENT") {
            self.environment = v;
        }
        if let Some(v) = lookup("ALLOWED_HOSTS") {
            self.cors_origins = parse_list("ALLOWED_HOSTS", &v)?;
        }
        if let Some(v) = lookup("API_V1_STR") {
            self.api_prefix = v;
        }
        if let Some(v) = lookup("SEED_HOUSE_MENU") {
            self.seed_house_menu = parse_bool("SEED_HOUSE_MENU", &v)?;
        }
        Ok(self)
    }

    /// Check the resolved configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid {
                field: "port",
                message: "must be > 0".to_string(),
            });
        }

        if self.project_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "project_name",
                message: "must not be empty".to_string(),
            });
        }

        let prefix = &self.api_prefix;
        if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
            return Err(ConfigError::Invalid {
                field: "api_prefix",
                message: format!(
                    "'{}' must start with '/', must not be '/' and must not end with '/'",
                    prefix
                ),
            });
        }
        if prefix.contains('*') {
            return Err(ConfigError::Invalid {
                field: "api_prefix",
                message: format!("'{}' must not contain a wildcard", prefix),
            });
        }

        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when CORS should accept any origin
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnv {
            var,
            message: format!("'{}' is not a boolean", other),
        }),
    }
}

// Accepts a JSON array (`["a","b"]`) or a comma-separated list (`a,b`).
fn parse_list(var: &'static str, value: &str) -> Result<Vec<String>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| ConfigError::InvalidEnv {
            var,
            message: e.to_string(),
        });
    }
    Ok(trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}
