//! Deterministic rules for the cave adventure.
//!
//! `game-core` defines the canonical rules (combatants, damage, combat turns,
//! story phases) and exposes pure APIs that any front-end can drive. All
//! state mutation flows through [`engine::GameEngine`]; the event loop owns a
//! [`GameSession`] and feeds it one [`InputEvent`] at a time.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod session;
pub mod state;

pub use combat::{DamageRoll, Strike, calculate_damage, is_critical, resolve_damage};
pub use config::GameConfig;
pub use engine::{BattleOutcome, GameEngine, StepOutcome, TurnReport, resolve_turn};
pub use env::{AttackTables, GameEnv, PcgRng, RngOracle, ScriptedRng};
pub use error::{AttackTableError, CombatantError, SetupError};
pub use session::GameSession;
pub use state::{
    AttackDefinition, AttackTable, Combatant, CombatantStats, CombatantView, GameSnapshot,
    GameState, InputEvent, Phase, Turn,
};
