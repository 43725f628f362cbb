//! Tracing setup: a log file under the XDG state dir, or stderr when that
//! cannot be opened. Stdout is left alone; generated code goes there.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// Directives used when `RUST_LOG` is unset: `warn` for dependencies,
/// `info` for our crates (`debug` when verbose).
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,har2code={level},har2code_core={level}")
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// `~/.local/state/har2code/har2code.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("har2code")?;
    xdg_dirs
        .place_state_file("har2code.log")
        .context("create har2code state dir")
}

/// Installs the global subscriber. Falls back to stderr if the log file
/// cannot be opened; only fails if a subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<LogDestination> {
    let file = log_file_path().and_then(|path| {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open log file {}", path.display()))?;
        Ok((path, file))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_ansi(false);

    match file {
        Ok((path, file)) => {
            builder
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
            tracing::debug!("har2code logging to {}", path.display());
            Ok(LogDestination::File(path))
        }
        Err(e) => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;
            tracing::warn!("log file unavailable ({e:#}); logging to stderr");
            Ok(LogDestination::Stderr)
        }
    }
}
