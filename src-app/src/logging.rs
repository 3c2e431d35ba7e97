//! Logging to stderr, plus a daily rolling file in release builds.
//!
//! stdout carries the event history, so the console layer writes to stderr.
//! Files go to `<data dir>/keyscan/logs/keyscan.log.<date>`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn log_dir() -> PathBuf {
    let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("keyscan").join("logs")
}

/// Initialize logging with console and optional file output.
pub fn setup(is_production: bool) {
    let filter = if is_production {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("debug")
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let file_layer = if is_production {
        let log_dir = log_dir();
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!(
                "Warning: Failed to create log directory {:?}: {}",
                log_dir, e
            );
            None
        } else {
            let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "keyscan.log");
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_filter(EnvFilter::new("info")),
            )
        }
    } else {
        None
    };

    match file_layer {
        Some(file_layer) => {
            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .init();
            tracing::info!("File logging enabled: {:?}", log_dir());
        }
        None => {
            tracing_subscriber::registry().with(console_layer).init();
        }
    }

    tracing::info!("Logging initialized (production={})", is_production);
}
