//! Terminal client for the cave adventure.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ config      (env vars, log directory)
//!   ├─→ logging     (file-only tracing)
//!   ├─→ name_prompt (player name entry)
//!   └─→ App         (game loop)
//!         ├─→ GameSession (game-core: phases and battle)
//!         ├─→ InputHandler (keys to game events)
//!         ├─→ MessageLog   (combat log)
//!         └─→ presentation (ratatui widgets)
//! ```
//!
//! All game rules live in `game-core`; this crate only maps keys to
//! [`game_core::InputEvent`]s and draws [`game_core::GameSnapshot`]s.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod message;
pub mod name_prompt;
pub mod presentation;

pub use app::App;
pub use config::{ClientConfig, UiConfig};
pub use message::{MessageEntry, MessageLevel, MessageLog};
