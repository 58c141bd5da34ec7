//! Service start-up: configuration drives the tracing subscriber

use envbind::Populate;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;
use tracing::Level;

#[derive(Debug, Populate)]
struct Config {
    #[env("SERVICE_NAME,required")]
    pub service_name: String,

    #[env("LOG_LEVEL")]
    pub log_level: Level,

    #[env("REQUEST_TIMEOUT")]
    pub request_timeout: Duration,

    #[env("MAINTENANCE_WINDOW_START")]
    pub maintenance_window_start: Option<OffsetDateTime>,

    #[env("WORKERS")]
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            log_level: Level::INFO,
            request_timeout: Duration::from_secs(30),
            maintenance_window_start: None,
            workers: 4,
        }
    }
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("SERVICE_NAME", "billing");
    std::env::set_var("LOG_LEVEL", "debug");
    std::env::set_var("REQUEST_TIMEOUT", "1m30s");
    std::env::set_var("MAINTENANCE_WINDOW_START", "2025-01-01T02:00:00Z");

    let config = Config::from_env()?;

    // Configuration decides the log level; RUST_LOG still wins when set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(config.log_level).into())
                .from_env_lossy(),
        )
        .init();

    tracing::info!(service = %config.service_name, "Configuration loaded");
    tracing::debug!(
        timeout = ?config.request_timeout,
        workers = config.workers,
        maintenance = ?config.maintenance_window_start,
        "Runtime settings"
    );

    Ok(())
}
