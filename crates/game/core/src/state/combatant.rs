//! Combatant model: stat block plus a clamped health meter.

use crate::error::CombatantError;

/// Fixed stats a combatant is created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Percentage in `0..=100`.
    pub crit_chance: u8,
}

/// A participant in the encounter.
///
/// Everything except the current HP is fixed at construction. HP only moves
/// through [`Combatant::apply_damage`] and always stays in `0..=max_hp`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CombatantRecord"))]
pub struct Combatant {
    name: String,
    max_hp: u32,
    hp: u32,
    attack: u32,
    defense: u32,
    crit_chance: u8,
}

impl Combatant {
    /// Creates a combatant at full health.
    ///
    /// Fails on a zero max HP or a critical chance above 100%.
    pub fn new(name: impl Into<String>, stats: CombatantStats) -> Result<Self, CombatantError> {
        let name = name.into();

        if stats.max_hp == 0 {
            return Err(CombatantError::ZeroMaxHp { name });
        }
        if stats.crit_chance > 100 {
            return Err(CombatantError::CritChanceOutOfRange {
                name,
                chance: stats.crit_chance,
            });
        }

        Ok(Self {
            name,
            max_hp: stats.max_hp,
            hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            crit_chance: stats.crit_chance,
        })
    }

    /// Overrides the current HP, clamped to `0..=max_hp`.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `(current, max)` HP.
    pub fn hp(&self) -> (u32, u32) {
        (self.hp, self.max_hp)
    }

    pub fn current_hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn crit_chance(&self) -> u8 {
        self.crit_chance
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtracts `amount` from HP, stopping at zero.
    ///
    /// Returns the HP actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount).min(self.max_hp);
        before - self.hp
    }

    /// One-line status for display, e.g. `Boss (HP: 700/700, Atk: 40, Def: 35)`.
    pub fn status_summary(&self) -> String {
        format!(
            "{} (HP: {}/{}, Atk: {}, Def: {})",
            self.name, self.hp, self.max_hp, self.attack, self.defense
        )
    }
}

/// Wire form of [`Combatant`]; deserialization validates through
/// [`Combatant::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombatantRecord {
    name: String,
    max_hp: u32,
    hp: u32,
    attack: u32,
    defense: u32,
    crit_chance: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<CombatantRecord> for Combatant {
    type Error = CombatantError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        if record.hp > record.max_hp {
            return Err(CombatantError::HpAboveMax {
                name: record.name,
                hp: record.hp,
                max_hp: record.max_hp,
            });
        }

        let stats = CombatantStats {
            max_hp: record.max_hp,
            attack: record.attack,
            defense: record.defense,
            crit_chance: record.crit_chance,
        };
        Ok(Self::new(record.name, stats)?.with_hp(record.hp))
    }
}
