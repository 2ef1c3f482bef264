//! File-backed tracing setup.
//!
//! The TUI owns the terminal through the alternate screen, so nothing may
//! log to stdout or stderr while it runs. Diagnostics go to a log file
//! instead, filtered through the `FOLIO_LOG` environment variable with the
//! usual `tracing_subscriber` directive syntax (`warn`, `folio=debug`, ...).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable that sets the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Filter applied when `FOLIO_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Default log location: `<config dir>/folio/folio.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("folio.log"))
}

/// Install the global tracing subscriber, appending to `path`.
///
/// Creates parent directories as needed. If a subscriber is already
/// installed (tests), the existing one is kept.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .ok();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}
