use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use browser_bookmarks_core::AppConfig;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Env settings first, then command-line flags on top.
pub(super) fn build_config(home: Option<PathBuf>, extra_paths: Option<String>) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(home) = home {
        config = config.with_home_dir(home);
    }
    if let Some(raw) = extra_paths.filter(|raw| !raw.trim().is_empty()) {
        config = config.with_default_extra_paths(raw);
    }
    config
}

pub(super) fn validate_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        anyhow::bail!("url must not be empty");
    }
    Ok(trimmed)
}

pub(super) fn open_url(url: &str) -> Result<()> {
    let url = validate_url(url)?;
    open::that(url).with_context(|| format!("failed to open {url} in the default handler"))
}
