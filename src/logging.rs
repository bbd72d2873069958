//! # Tracing Module
//!
//! Environment-aware console logging using the tracing ecosystem. Logs go to
//! stdout, which is what containerized deployments capture.
//!
//! Level resolution order: `LOG_LEVEL`, then `RUST_LOG`, then a default derived from
//! the environment name (`BATCH_SCHEDULER_ENV` or `APP_ENV`). Set `LOG_FORMAT=json`
//! for machine-readable output.

use chrono::Utc;
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the global console subscriber. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let json_output = use_json_format();

        // Determine if we're in a TTY for ANSI color support
        let use_ansi = IsTerminal::is_terminal(&std::io::stdout());

        let console_layer = if json_output {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .json()
                .with_filter(EnvFilter::new(&log_level))
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(use_ansi)
                .with_filter(EnvFilter::new(&log_level))
                .boxed()
        };

        let subscriber = tracing_subscriber::registry().with(console_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                log_level = %log_level,
                ansi_colors = use_ansi,
                json_output,
                "Console logging initialized"
            );
        }
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("BATCH_SCHEDULER_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment variables or environment defaults
fn get_log_level(environment: &str) -> String {
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        return level.to_lowercase();
    }

    default_log_level(environment).to_string()
}

fn default_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        "test" | "development" => "debug",
        _ => "debug",
    }
}

fn use_json_format() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Log structured data for a batch run milestone
pub fn log_batch_operation(
    operation: &str,
    batch_size: usize,
    total_items: usize,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        batch_size,
        total_items,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "BATCH_OPERATION"
    );
}
