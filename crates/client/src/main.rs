//! Cave adventure binary.
//!
//! Composition root: loads configuration, installs file logging, asks for
//! the player's name and runs the game loop on the terminal.
//!
//! # Examples
//!
//! ```bash
//! # Replay a specific run
//! ADVENTURE_SEED=42 cargo run -p adventure-client
//!
//! # Skip the name prompt and log debug output
//! ADVENTURE_PLAYER_NAME=Aria RUST_LOG=debug cargo run -p adventure-client
//! ```

use anyhow::Result;
use game_core::{GameConfig, GameSession, PcgRng};

use adventure_client::{App, ClientConfig, logging, name_prompt, presentation::terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);

    let log_dir = config.resolve_log_dir();
    let _log_guard = logging::setup_logging(&log_dir, &logging::session_id(seed))?;
    tracing::info!(seed, "cave adventure starting");

    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let name = match config.player_name.clone() {
        Some(name) => name,
        None => match name_prompt::prompt_name(&mut terminal)? {
            Some(name) => name,
            None => {
                tracing::info!("name prompt cancelled");
                terminal::restore()?;
                return Ok(());
            }
        },
    };

    let session = GameSession::new(name, &GameConfig::default(), PcgRng::new(seed))?;
    tracing::info!(player = %session.state().player.name(), "session created");

    let session = App::new(session, &config.ui).run(&mut terminal).await?;

    terminal::restore()?;
    tracing::info!(phase = %session.phase(), "cave adventure exiting");

    Ok(())
}
