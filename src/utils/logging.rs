//! Logging configuration and setup
//!
//! This module provides logging initialization and the structured log
//! helpers used around group creation.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{GroupError, Result};

/// Initialize logging based on configuration
///
/// When a log directory is configured a daily-rolling file layer is added
/// next to stdout. The returned guard must be held for the lifetime of the
/// process, dropping it flushes and stops the file writer.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| GroupError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "community-groups.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| GroupError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log group lifecycle events
pub fn log_group_event(group: &str, event: &str, owner: Option<&str>) {
    info!(
        group = group,
        event = event,
        owner = owner,
        "Group event occurred"
    );
}

/// Log a single store primitive
pub fn log_store_operation(operation: &str, key: &str) {
    debug!(operation = operation, key = key, "Store operation");
}
