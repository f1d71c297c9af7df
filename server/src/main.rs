// Devfolio Server entrypoint
//
// The heavy lifting (initialization, middleware wiring, serving) lives
// in dedicated modules so this file remains a thin orchestrator.

use std::path::Path;

use anyhow::Result;
use devfolio_server::config::ServerConfig;
use devfolio_server::{lifecycle, logging};
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (fallback to defaults when config file missing)
    let config_path = "config.toml";
    let config = if Path::new(config_path).exists() {
        ServerConfig::from_file(config_path)?
    } else {
        eprintln!("config.toml not found, starting with default configuration");
        ServerConfig::default()
    };

    // Logging before any other side effects
    logging::init_logging(
        &config.logging.level,
        config.logging.log_to_console,
        config.logging.log_file.as_deref(),
    )?;

    info!("Devfolio API v{}", env!("CARGO_PKG_VERSION"));
    info!("Host: {}  Port: {}", config.server.host, config.server.port);

    let components = lifecycle::bootstrap(&config)?;
    lifecycle::run(config, components).await
}
