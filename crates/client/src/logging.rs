//! File-only tracing setup.
//!
//! The TUI owns stdout/stderr, so logs go to
//! `<log_dir>/<session_id>/client.log` and never to the terminal.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global subscriber.
///
/// `RUST_LOG` is honoured; `info` is always enabled. The returned guard
/// flushes the background writer on drop and must outlive the game loop.
pub fn setup_logging(log_dir: &Path, session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = session_dir(log_dir, session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Per-run directory under the log root.
pub fn session_dir(log_dir: &Path, session_id: &str) -> PathBuf {
    log_dir.join(session_id)
}

/// Session identifier derived from the seed, so a log can be replayed with
/// `ADVENTURE_SEED`.
pub fn session_id(seed: u64) -> String {
    format!("session_{seed:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_embeds_seed_in_hex() {
        assert_eq!(session_id(255), "session_00000000000000ff");
    }

    #[test]
    fn session_dir_nests_under_log_root() {
        let dir = session_dir(Path::new("/var/log/adventure"), "session_1");
        assert_eq!(dir, PathBuf::from("/var/log/adventure/session_1"));
    }
}
