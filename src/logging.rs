//! Logger setup.
//!
//! The interactive game owns the terminal, so logs only go to a file there.
//! Headless runs may fall back to stderr.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Install the global logger according to `config`.
///
/// With no `log_path`, logs go to stderr when `stderr_fallback` is set and
/// are dropped otherwise.
pub fn init_logging(config: &Config, stderr_fallback: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder.parse_filters(&config.log_filter);

    match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if stderr_fallback => {
            builder.target(Target::Stderr);
        }
        None => return Ok(()),
    }

    builder.try_init().context("install logger")?;
    Ok(())
}
