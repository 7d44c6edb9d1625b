//! User registry CLI server
//!
//! Headless REST service suitable for deployment as a systemd service,
//! Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/user-registry/config.toml)
//! user-registry
//!
//! # Custom config path
//! user-registry --config /etc/user-registry/config.toml
//!
//! # Override port and seed file
//! user-registry --port 8080 --seed ./api_test_data.json
//!
//! # Validate config without starting
//! user-registry --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use user_registry::config::AppConfig;
use user_registry::server::{init_tracing, ServerHandle, ServerOptions};

/// In-memory users REST API.
#[derive(Parser, Debug)]
#[command(
    name = "user-registry",
    version,
    about = "In-memory user registry REST service",
    long_about = "User registry: REST API over an in-memory list of users \
                  seeded from a JSON file.\n\n\
                  Default config: ~/.config/user-registry/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USER_REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Seed file to load instead of the configured candidates.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(user_registry::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref host) = cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref seed) = cli.seed {
        config.seed.paths = vec![seed.clone()];
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            eprintln!("❌ {}", e);
            return Err(e.into());
        }
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Seed files  : {:?}", config.seed.paths);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // Init tracing first so subsequent logs are formatted properly
    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions { config }).await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
