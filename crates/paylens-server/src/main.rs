//! Paylens server entrypoint.
//!
//! The heavy lifting (bootstrap, HTTP wiring, graceful shutdown) lives in
//! `lifecycle`; this file stays a thin orchestrator.

mod config;
mod lifecycle;
mod logging;

use anyhow::Result;
use config::ServerConfig;
use lifecycle::{bootstrap, run};
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fall back to defaults when config.toml is absent)
    let config = match ServerConfig::from_file("config.toml") {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Warning: config.toml not usable ({}); starting with defaults", e);
            ServerConfig::default()
        }
    };

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("Starting Paylens server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}, data={}",
        config.server.host, config.server.port, config.storage.rocksdb_path
    );

    // Build shared state, then run the HTTP server until shutdown
    let components = bootstrap(&config).await?;
    run(&config, components).await
}
