//! CLI argument definitions using clap
//!
//! Commands:
//! - dish-api serve [--config <path>] [--host <host>] [--port <port>] [--empty]
//! - dish-api config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dish API - an in-memory dish catalogue served over HTTP
#[derive(Parser, Debug)]
#[command(name = "dish-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty menu instead of the house menu
        #[arg(long)]
        empty: bool,
    },

    /// Print the resolved configuration and exit
    Config {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
