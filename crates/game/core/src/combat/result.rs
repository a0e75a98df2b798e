//! Record of a single applied attack.

use super::damage::DamageRoll;
use crate::state::Turn;

/// One attack that was resolved and applied during a battle step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    /// Side that attacked.
    pub attacker: Turn,
    pub attacker_name: String,
    pub attack_name: String,
    /// Base damage of the chosen attack, before criticals and defense.
    pub base_damage: u32,
    pub roll: DamageRoll,
    /// Defender HP after the damage was applied.
    pub defender_hp: u32,
}

impl Strike {
    /// `"<attacker> used <attack>! It dealt <n> damage."`
    pub fn describe(&self) -> String {
        format!(
            "{} used {}! It dealt {} damage.",
            self.attacker_name, self.attack_name, self.roll.damage
        )
    }

    /// `"<attacker> landed a CRITICAL HIT!"` when the roll was critical.
    pub fn critical_notice(&self) -> Option<String> {
        self.roll
            .critical
            .then(|| format!("{} landed a CRITICAL HIT!", self.attacker_name))
    }
}
