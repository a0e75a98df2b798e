//! Damage calculation with critical hits.

use crate::env::RngOracle;

/// Result of one damage resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRoll {
    /// The d100 critical roll (1-100).
    pub roll: u32,
    /// Whether the roll landed a critical hit.
    pub critical: bool,
    /// Final damage after criticals and defense.
    pub damage: u32,
}

/// A roll at or below the critical chance is a critical hit.
pub fn is_critical(roll: u32, crit_chance: u8) -> bool {
    roll <= u32::from(crit_chance)
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// if critical:
///     base_damage *= 2
/// final_damage = max(0, base_damage - defense)
/// ```
pub fn calculate_damage(base_damage: u32, defender_defense: u32, is_critical: bool) -> u32 {
    let base = if is_critical {
        base_damage.saturating_mul(2)
    } else {
        base_damage
    };
    base.saturating_sub(defender_defense)
}

/// Roll for a critical and compute the damage dealt.
///
/// Draws exactly one d100 from `rng`; everything else is pure.
pub fn resolve_damage(
    base_damage: u32,
    defender_defense: u32,
    crit_chance: u8,
    rng: &mut dyn RngOracle,
) -> DamageRoll {
    let roll = rng.roll_d100();
    let critical = is_critical(roll, crit_chance);

    DamageRoll {
        roll,
        critical,
        damage: calculate_damage(base_damage, defender_defense, critical),
    }
}
