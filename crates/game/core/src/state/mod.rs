//! Authoritative game state and its building blocks.
//!
//! [`GameState`] holds the mutable part of a run: the active phase, the turn
//! marker and the two combatants. It is owned by a
//! [`GameSession`](crate::GameSession) and only mutated by the engine.
mod attack;
mod combatant;
pub mod narrative;
mod phase;
mod snapshot;

pub use attack::{AttackDefinition, AttackTable};
pub use combatant::{Combatant, CombatantStats};
pub use phase::{InputEvent, Phase, Turn};
pub use snapshot::{CombatantView, GameSnapshot};

use crate::config::GameConfig;
use crate::error::CombatantError;

/// Mutable state of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,
    /// Only meaningful while `phase == Phase::Battle`.
    pub turn: Turn,
    pub player: Combatant,
    pub boss: Combatant,
}

impl GameState {
    /// Fresh state at [`Phase::Start`].
    pub fn new(player: Combatant, boss: Combatant) -> Self {
        Self {
            phase: Phase::Start,
            turn: Turn::Player,
            player,
            boss,
        }
    }

    /// Builds both combatants from configuration.
    pub fn from_config(
        player_name: impl Into<String>,
        config: &GameConfig,
    ) -> Result<Self, CombatantError> {
        let player = Combatant::new(player_name, config.player)?;
        let boss = Combatant::new(config.boss_name.clone(), config.boss)?;
        Ok(Self::new(player, boss))
    }

    /// Places the state directly in `phase`; used to set up scenarios.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub fn with_turn(mut self, turn: Turn) -> Self {
        self.turn = turn;
        self
    }
}
