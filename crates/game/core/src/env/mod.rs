//! Read-only collaborators the engine consults while resolving an event.
//!
//! [`GameEnv`] bundles the attack tables and the RNG oracle so the engine
//! never reaches for ambient state. Both are owned by the session and lent
//! to the engine for exactly one step.
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};

use crate::config::GameConfig;
use crate::error::AttackTableError;
use crate::state::AttackTable;

/// The two fixed attack tables of an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackTables {
    pub player: AttackTable,
    pub boss: AttackTable,
}

impl AttackTables {
    pub fn new(player: AttackTable, boss: AttackTable) -> Self {
        Self { player, boss }
    }

    /// Builds both tables from configuration, rejecting empty or oversized ones.
    pub fn from_config(config: &GameConfig) -> Result<Self, AttackTableError> {
        Ok(Self {
            player: AttackTable::new("player", config.player_attacks.iter().cloned())?,
            boss: AttackTable::new("boss", config.boss_attacks.iter().cloned())?,
        })
    }
}

/// Borrowed environment handed to [`GameEngine::execute`](crate::GameEngine::execute).
pub struct GameEnv<'a> {
    attacks: &'a AttackTables,
    rng: &'a mut dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(attacks: &'a AttackTables, rng: &'a mut dyn RngOracle) -> Self {
        Self { attacks, rng }
    }

    /// Splits the environment so the tables and the RNG can be borrowed together.
    pub fn parts(&mut self) -> (&AttackTables, &mut dyn RngOracle) {
        (self.attacks, &mut *self.rng)
    }
}
