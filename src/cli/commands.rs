//! CLI command implementations
//!
//! `serve` resolves configuration, builds the store and runs the HTTP server
//! on a tokio runtime. `config` prints the configuration `serve` would use.

use std::collections::HashMap;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Command-line values that win over file and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Start with an empty menu
    pub empty: bool,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            empty,
        } => serve(config.as_deref(), ConfigOverrides { host, port, empty }),
        Command::Config { config } => show_config(config.as_deref()),
    }
}

/// Dotenv file read from the working directory
pub const ENV_FILE: &str = ".env";

/// Resolve configuration from the process environment and `./.env`
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> CliResult<HttpServerConfig> {
    resolve_config_with_env_file(config_path, Path::new(ENV_FILE), overrides)
}

/// Resolve configuration with variables from `env_file` under the process
/// environment. Process variables win; a missing file is skipped.
pub fn resolve_config_with_env_file(
    config_path: Option<&Path>,
    env_file: &Path,
    overrides: &ConfigOverrides,
) -> CliResult<HttpServerConfig> {
    let file_vars = read_env_file(env_file)?;
    resolve_config_with(config_path, overrides, |var| {
        std::env::var(var).ok().or_else(|| file_vars.get(var).cloned())
    })
}

/// Read `KEY=value` pairs from a dotenv file without touching the process
/// environment. Keys are case sensitive.
pub fn read_env_file(path: &Path) -> CliResult<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => {
            return Err(CliError::config_error(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    iter.map(|item| {
        item.map_err(|e| {
            CliError::config_error(format!("Failed to parse {}: {}", path.display(), e))
        })
    })
    .collect()
}

/// Resolve configuration: defaults, file, environment, then overrides
pub fn resolve_config_with<F>(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    lookup: F,
) -> CliResult<HttpServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match config_path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    let mut config = base.apply_env_with(lookup)?;

    if let Some(host) = &overrides.host {
        config.host = host.clone();
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if overrides.empty {
        config.seed_house_menu = false;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: Option<&Path>, overrides: ConfigOverrides) -> CliResult<()> {
    log_event(Event::ServerStarting);

    let config = resolve_config(config_path, &overrides)?;
    let port = config.port.to_string();
    let debug = config.debug.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("debug", debug.as_str()),
            ("environment", config.environment.as_str()),
            ("host", config.host.as_str()),
            ("port", port.as_str()),
            ("project", config.project_name.as_str()),
        ],
    );

    let server = HttpServer::with_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("reason", reason.as_str())]);
        CliError::boot_failed(format!("HTTP server failed: {}", e))
    })
}

/// Print the resolved configuration as JSON
pub fn show_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = resolve_config(config_path, &ConfigOverrides::default())?;
    write_json(&config)
}
