//! Debug logging setup
//!
//! The terminal belongs to the UI, so log output goes to a file next to the
//! config instead of stderr.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::ensure_app_dir;

pub const DEBUG_ENV: &str = "TODO_LIST_DEBUG";
const DEFAULT_FILTER: &str = "todo_list_manager=debug";

/// Install the file subscriber when debugging was requested through
/// `--debug` or [`DEBUG_ENV`]. Returns the log path if logging is active.
pub fn init(enabled: bool) -> Result<Option<PathBuf>> {
    if !enabled {
        return Ok(None);
    }

    let path = ensure_app_dir()?.join("debug.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}
