//! Client Registry Server Entry Point

use clap::Parser;
use client_registry_server::{cli::Cli, config, logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Client Registry v{}", env!("CARGO_PKG_VERSION"));

    // レジストリはプロセスと同じ寿命
    let state = AppState::default();

    if let Err(e) = server::run(state, &config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
