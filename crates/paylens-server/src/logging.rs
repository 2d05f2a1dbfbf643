//! Logging setup — powered by tracing-subscriber.
//!
//! Uses tracing-subscriber for structured spans and events. A compatibility
//! bridge (`tracing_log::LogTracer`) captures all existing `log::*` macro
//! calls from the library crates and routes them through the tracing
//! subscriber so span context is preserved end-to-end.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text format: timestamp LEVEL target - message
    Compact,
    /// JSON Lines format for structured logging
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Build the `EnvFilter` from the base level plus hardcoded noisy-crate
/// overrides.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];

    // Suppress noisy third-party crates
    let noisy: &[(&str, &str)] = &[
        ("actix_server", "warn"),
        ("actix_web", "warn"),
        ("h2", "warn"),
        ("tracing", "warn"),
    ];
    for (target, lvl) in noisy {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// Initialize logging based on configuration.
///
/// Sets up `tracing-subscriber` with:
///  - Colored console layer (when `log_to_console` is true)
///  - File layer (compact text or JSON lines)
///  - `tracing_log::LogTracer` bridge so that all `log::*` calls are captured
///  - Span events on CLOSE (prints elapsed time for each span)
pub fn init_logging(
    level: &str,
    file_path: &str,
    log_to_console: bool,
    format: &str,
) -> anyhow::Result<()> {
    let log_format = LogFormat::from_str(format);

    // Create logs directory if it doesn't exist
    if let Some(parent) = Path::new(file_path).parent() {
        fs::create_dir_all(parent)?;
    }

    // Open log file in append mode
    let log_file = OpenOptions::new().create(true).append(true).open(file_path)?;

    // Bridge `log` crate → tracing (for all existing log::info!() etc. calls)
    tracing_log::LogTracer::init().ok(); // ok() in case already initialized

    let console_layer = if log_to_console {
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(build_env_filter(level)?),
        )
    } else {
        None
    };

    let file_layer = if log_format == LogFormat::Json {
        // JSON lines — includes span fields automatically
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(log_file)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_span_list(true)
            .with_filter(build_env_filter(level)?)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(log_file)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(build_env_filter(level)?)
            .boxed()
    };

    // Compose and install as global subscriber
    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::trace!(
        "Logging initialized: level={}, console={}, file={}",
        level,
        log_to_console,
        file_path
    );

    Ok(())
}
