//! Persons service (v1)
//!
//! A CRUD service for person records and their postal addresses, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout, body limit)
//!                         │
//!                         ▼
//!                     http::handlers ──▶ domain::normalize (writes only)
//!                         │
//!                         ▼
//!                     storage::PersonRepository (RwLock<Vec<Person>>)
//!                         │
//!     Client Response     ▼
//!     ◀────────────── http::response (JSON, or empty 200)
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

use persons_service::config::{load_config, validate_config, ConfigError, ServiceConfig};
use persons_service::lifecycle::{self, signals::shutdown_signal};
use persons_service::observability::init_logging;

#[derive(Parser)]
#[command(name = "persons-service")]
#[command(about = "In-memory CRUD service for person records", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "persons-service starting"
    );

    let service = lifecycle::start(config).await?;
    service.run_until(shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
