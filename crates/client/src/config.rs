//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Client-side configuration.
///
/// Game balance lives in [`game_core::GameConfig`]; this only covers what the
/// terminal client decides: seeding, logging and UI sizing.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Fixed RNG seed. `None` draws a fresh one per run.
    pub seed: Option<u64>,
    /// Skips the name prompt when set.
    pub player_name: Option<String>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ADVENTURE_SEED` - Fixed RNG seed (default: random)
    /// - `ADVENTURE_PLAYER_NAME` - Player name, skips the prompt (default: ask)
    /// - `ADVENTURE_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `CLI_MESSAGE_CAPACITY` - Combat log length (default: 64)
    /// - `CLI_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self {
            seed: read_env::<u64>("ADVENTURE_SEED"),
            player_name: env::var("ADVENTURE_PLAYER_NAME").ok(),
            log_dir: env::var_os("ADVENTURE_LOG_DIR").map(PathBuf::from),
            ui: UiConfig::default(),
        };

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }
        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }

        config
    }

    /// Log directory: the override if set, else the platform cache dir.
    ///
    /// - Linux: `~/.cache/cave-adventure/logs`
    /// - macOS: `~/Library/Caches/cave-adventure/logs`
    /// - Windows: `%LOCALAPPDATA%\cave-adventure\cache\logs`
    /// - Fallback: `./logs`
    pub fn resolve_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        directories::ProjectDirs::from("", "", "cave-adventure")
            .map(|dirs| dirs.cache_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("./logs"))
    }
}

/// UI layout and pacing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Number of combat log lines kept.
    pub message_capacity: usize,
    /// Sleep between input polls and redraws.
    pub frame_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_capacity: 64,
            frame_interval_ms: 16,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
