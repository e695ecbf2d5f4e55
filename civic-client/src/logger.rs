//! Logging Infrastructure
//!
//! stderr output plus an optional daily-rolling file. stdout is reserved for
//! rendered pages.

use crate::error::{ClientError, ClientResult};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the filter: RUST_LOG if set, otherwise `level` for this workspace
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,shared={level},civic_client={level},civic={level}"
        ))
    })
}

/// Initialize the global subscriber
///
/// The file layer is only added when `log_dir` exists.
pub fn init_logger(level: &str, log_dir: Option<&Path>) -> ClientResult<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let file_layer = log_dir.filter(|dir| dir.exists()).map(|dir| {
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(tracing_appender::rolling::daily(dir, "civic"))
    });

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ClientError::Config(format!("logger: {}", e)))
}
