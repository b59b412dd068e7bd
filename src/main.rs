//! User registry server
//!
//! ```sh
//! # Run with default config (~/.config/user-registry/config.toml)
//! user-registry
//!
//! # Custom config path and port
//! user-registry --config ./config.toml --port 8080
//!
//! # Validate config without starting
//! user-registry --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use user_registry::config::AppConfig;
use user_registry::default_config_path;
use user_registry::server::{init_tracing, run};

/// User records CRUD server: REST API, HTML pages, JSON file storage.
#[derive(Parser, Debug)]
#[command(name = "user-registry", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USER_REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the JSON data file.
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);
    let load_failed = loaded.is_err();

    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };
    config.apply_env();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);
    match &loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    if cli.check {
        if load_failed {
            return ExitCode::FAILURE;
        }
        info!("Configuration OK: {:?}", config);
        return ExitCode::SUCCESS;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
