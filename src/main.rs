use tracing::{error, info};

use lanshare::network::{access_urls, network_addresses};
use lanshare::{Config, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    if let Err(e) = lanshare::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        lanshare::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let server = match WebServer::new(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    info!("lanshare - LAN file and text sharing");
    info!(
        "Server running on http://localhost:{} (bound to {})",
        config.server.port,
        server.addr()
    );
    info!("Uploads directory: {}", config.files.storage_path);
    info!("API available at /api/*");

    match network_addresses() {
        Ok(addresses) => {
            for url in access_urls(&addresses, config.server.port) {
                info!("Network access: {}", url);
            }
        }
        Err(e) => error!("Failed to enumerate network interfaces: {}", e),
    }

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
