//! Attack definitions and the fixed per-side attack tables.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::AttackTableError;

/// A named attack with its base damage before criticals and defense.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDefinition {
    pub name: String,
    pub base_damage: u32,
}

impl AttackDefinition {
    pub fn new(name: impl Into<String>, base_damage: u32) -> Self {
        Self {
            name: name.into(),
            base_damage,
        }
    }
}

/// Ordered, non-empty list of attacks one side can draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AttackTableRecord"))]
pub struct AttackTable {
    entries: ArrayVec<AttackDefinition, { GameConfig::MAX_ATTACKS }>,
}

impl AttackTable {
    /// Builds a table; `owner` only labels errors.
    pub fn new(
        owner: &'static str,
        attacks: impl IntoIterator<Item = AttackDefinition>,
    ) -> Result<Self, AttackTableError> {
        let mut entries = ArrayVec::new();
        for attack in attacks {
            entries.try_push(attack).map_err(|_| AttackTableError::Overflow {
                owner,
                capacity: GameConfig::MAX_ATTACKS,
            })?;
        }

        if entries.is_empty() {
            return Err(AttackTableError::Empty { owner });
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackDefinition> {
        self.entries.iter()
    }

    /// Draws one attack uniformly.
    pub fn choose(&self, rng: &mut dyn RngOracle) -> &AttackDefinition {
        let len = self.entries.len();
        &self.entries[rng.pick_index(len) % len]
    }
}

/// Wire form of [`AttackTable`]; deserialization validates through
/// [`AttackTable::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AttackTableRecord {
    entries: Vec<AttackDefinition>,
}

#[cfg(feature = "serde")]
impl TryFrom<AttackTableRecord> for AttackTable {
    type Error = AttackTableError;

    fn try_from(record: AttackTableRecord) -> Result<Self, Self::Error> {
        Self::new("table", record.entries)
    }
}
