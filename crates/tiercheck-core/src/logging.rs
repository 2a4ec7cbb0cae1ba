//! File-based logging setup.
//!
//! The TUI owns the terminal's alternate screen, so diagnostics go to a log
//! file under ${TIERCHECK_HOME}/logs instead of stdout/stderr. Filtering is
//! controlled by RUST_LOG (default: info for this workspace's crates).

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber writing to a daily-rolled log file.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// callers keep it alive for the process lifetime.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = crate::config::paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "tiercheck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tiercheck=info,tiercheck_core=info,tiercheck_tui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
