//! Tracing setup.
//!
//! The TUI owns the terminal, so it logs to a daily rolling file. The
//! one-shot command logs to stderr.

use crate::config::LogConfig;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "summa-view.log";

fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Log to a file under `config.path`. Keep the guard alive until exit.
pub fn init_file(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.path)?;
    let file_appender = tracing_appender::rolling::daily(&config.path, LOG_FILE);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter(config))
        .with(file_layer)
        .try_init()?;

    Ok(file_guard)
}

pub fn init_stderr(config: &LogConfig) -> anyhow::Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter(config))
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
