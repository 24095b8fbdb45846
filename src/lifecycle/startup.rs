//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging from the configured (or overridden) level
//! - Build the initial route table

use std::path::Path;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::config::{load_config, ConfigError, ObservabilityConfig, RouteConfig, RouterConfig};
use crate::observability::logging;
use crate::routing::Router;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load {path}: {source}")]
    Config { path: String, source: ConfigError },

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),
}

/// Load the route table file and install logging.
///
/// Logging is installed even when loading fails, using default settings, so
/// the failure itself is reported through it.
pub fn init(config_path: &Path, log_level: Option<&str>) -> Result<RouterConfig, StartupError> {
    let loaded = load_config(config_path);

    let observability = loaded
        .as_ref()
        .map(|config| config.observability.clone())
        .unwrap_or_default();
    init_logging(&observability, log_level)?;

    match loaded {
        Ok(config) => {
            tracing::info!(
                path = ?config_path,
                routes = config.routes.len(),
                "Configuration loaded"
            );
            Ok(config)
        }
        Err(source) => {
            tracing::error!(path = ?config_path, error = %source, "Failed to load configuration");
            Err(StartupError::Config {
                path: config_path.display().to_string(),
                source,
            })
        }
    }
}

fn init_logging(observability: &ObservabilityConfig, log_level: Option<&str>) -> Result<(), TryInitError> {
    let level = log_level.unwrap_or(&observability.log_level);
    logging::init(level, observability.log_format)
}

/// Build the initial route table from a loaded configuration.
pub fn build_router(config: &RouterConfig) -> Router<RouteConfig> {
    Router::from_config(config.routes.clone())
}
