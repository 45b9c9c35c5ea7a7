//! Logging Infrastructure
//!
//! Human-readable lines on stdout, or JSON lines in a daily rolling file
//! (`pos-server.YYYY-MM-DD`) when a log directory is configured and exists.
//! `RUST_LOG` overrides the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "pos-server";

/// Logger with the default level and stdout output
pub fn init_logger() {
    init_logger_with_file(None, None);
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = env_filter(log_level.unwrap_or("info"));

    if let Some(dir) = log_dir {
        if Path::new(dir).is_dir() {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_current_span(false)
                .with_writer(appender)
                .try_init();
            return;
        }
        // 目录不存在时退回 stdout
        eprintln!("Log directory {} does not exist, logging to stdout", dir);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
