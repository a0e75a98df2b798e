//! Construction-time errors for game-core.
//!
//! The rules themselves never fail: an event that does not apply to the
//! current phase is ignored, and damage is saturating. The only fallible
//! step is assembling a session from stat blocks and attack tables, where a
//! bad value is a programmer error that should stop the program before the
//! first frame is drawn.

/// Invalid combatant stat block.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    #[error("combatant '{name}' must start with a positive max HP")]
    ZeroMaxHp { name: String },

    #[error("combatant '{name}' has critical chance {chance}%, expected 0..=100")]
    CritChanceOutOfRange { name: String, chance: u8 },

    #[error("combatant '{name}' has {hp} HP, above its max of {max_hp}")]
    HpAboveMax { name: String, hp: u32, max_hp: u32 },
}

/// Invalid attack table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackTableError {
    #[error("attack table for {owner} is empty")]
    Empty { owner: &'static str },

    #[error("attack table for {owner} exceeds {capacity} entries")]
    Overflow {
        owner: &'static str,
        capacity: usize,
    },
}

/// Errors surfaced while assembling a [`GameSession`](crate::GameSession).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Combatant(#[from] CombatantError),

    #[error(transparent)]
    AttackTable(#[from] AttackTableError),
}
