//! CLI module for the dish service
//!
//! Provides command-line interface for:
//! - serve: Resolve configuration and run the HTTP server
//! - config: Print the resolved configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    read_env_file, resolve_config, resolve_config_with, resolve_config_with_env_file, run,
    run_command, serve, show_config, ConfigOverrides, ENV_FILE,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
