use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub(crate) const LOG_FILTER_ENV: &str = "BROWSER_BOOKMARKS_LOG";
pub(crate) const LOG_FILE_ENV: &str = "BROWSER_BOOKMARKS_LOG_FILE";
const DEFAULT_LOG_FILTER: &str = "browser_bookmarks=info,browser_bookmarks_core=info";

/// Installs the global subscriber. Stdout carries host responses, so logs go
/// to stderr unless a log file is configured.
pub(crate) fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match std::env::var_os(LOG_FILE_ENV).filter(|path| !path.is_empty()) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.to_string_lossy()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
    }
    Ok(())
}
