//! Logging setup for the simulator binary.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform-specific log directory.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/thief-sim/logs`
/// - Linux: `~/.cache/thief-sim/logs` (or `$XDG_CACHE_HOME/thief-sim/logs`)
/// - Windows: `%LOCALAPPDATA%\thief-sim\logs`
/// - Fallback: `/tmp/thief-sim/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "thief-sim")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/thief-sim"))
        .join("logs")
}

/// Setup logging to both stderr and a per-session file.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the whole run.
pub fn setup_logging(session_id: Option<&str>, root: Option<&Path>) -> Result<WorkerGuard> {
    let root = root.map_or_else(log_dir, Path::to_path_buf);

    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = root.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "sim.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/sim.log", session_log_dir.display());

    Ok(guard)
}
