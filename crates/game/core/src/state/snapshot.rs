//! Read-only views handed to the presentation layer.

use super::{Combatant, GameState, Phase, Turn};

/// Display data for one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub name: String,
    pub summary: String,
    pub hp: u32,
    pub max_hp: u32,
}

impl CombatantView {
    pub fn from_combatant(combatant: &Combatant) -> Self {
        let (hp, max_hp) = combatant.hp();
        Self {
            name: combatant.name().to_string(),
            summary: combatant.status_summary(),
            hp,
            max_hp,
        }
    }

    /// Remaining health as a fraction in `0.0..=1.0`, for health bars.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub phase: Phase,
    pub turn: Turn,
    pub player: CombatantView,
    pub boss: CombatantView,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            turn: state.turn,
            player: CombatantView::from_combatant(&state.player),
            boss: CombatantView::from_combatant(&state.boss),
        }
    }
}
