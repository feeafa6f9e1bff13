//! CLI module for client-registry
//!
//! Provides command-line interface for the client registry server.

use clap::Parser;
use std::path::PathBuf;

/// Client registry - in-memory CRUD service for client records
#[derive(Parser, Debug)]
#[command(name = "client-registry")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CLIENT_REGISTRY_HOST        Bind address (default: 0.0.0.0)
    CLIENT_REGISTRY_PORT        Listen port (default: 8000)
    CLIENT_REGISTRY_LOG_LEVEL   Log level (default: info)
    RUST_LOG                    Full tracing filter (overrides log level)
"#)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}
