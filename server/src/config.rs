//! Configuration management via environment variables
//!
//! Layers the optional JSON config file, environment variables and CLI
//! flags on top of [`ServerConfig`] defaults.

use client_registry_common::{config::ServerConfig, error::CommonError};

use crate::cli::Cli;

/// Environment variable for the bind address
pub const ENV_HOST: &str = "CLIENT_REGISTRY_HOST";
/// Environment variable for the listen port
pub const ENV_PORT: &str = "CLIENT_REGISTRY_PORT";
/// Environment variable for the log level
pub const ENV_LOG_LEVEL: &str = "CLIENT_REGISTRY_LOG_LEVEL";

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Unparseable values fall back to `default` with a warning.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable '{}' has invalid value '{}', using default",
                name,
                raw
            );
            default
        }),
        Err(_) => default,
    }
}

/// Resolve the effective server configuration
///
/// Precedence: CLI flag > environment variable > config file > defaults.
pub fn resolve(cli: &Cli) -> Result<ServerConfig, CommonError> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };

    config.host = get_env_or(ENV_HOST, &config.host);
    config.port = get_env_parse(ENV_PORT, config.port);
    config.log_level = get_env_or(ENV_LOG_LEVEL, &config.log_level);

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    if config.host.trim().is_empty() {
        return Err(CommonError::Config("host must not be empty".to_string()));
    }

    Ok(config)
}
