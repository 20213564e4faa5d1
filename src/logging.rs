use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "finance_assistant=info";
pub const LOG_FILE_NAME: &str = "finance-assistant.log";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_file: PathBuf,
    pub filter: String,
}

impl LoggingConfig {
    /// `RUST_LOG` overrides the default filter.
    pub fn from_env(log_file: PathBuf) -> Self {
        Self {
            log_file,
            filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
        }
    }
}

/// Install a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    tracing::info!(path = %config.log_file.display(), "logging initialized");
    Ok(())
}
