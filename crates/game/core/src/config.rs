use crate::state::{AttackDefinition, CombatantStats};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Stat block applied to the player, whatever name they pick.
    pub player: CombatantStats,
    /// Display name of the boss.
    pub boss_name: String,
    /// Stat block of the boss.
    pub boss: CombatantStats,
    /// Attacks the player draws from, in display order.
    pub player_attacks: Vec<AttackDefinition>,
    /// Attacks the boss draws from, in display order.
    pub boss_attacks: Vec<AttackDefinition>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of entries in one attack table.
    pub const MAX_ATTACKS: usize = 8;
    /// Maximum number of strikes resolved for a single attack input (player + boss).
    pub const MAX_STRIKES_PER_TURN: usize = 2;

    // ===== defaults =====
    pub const DEFAULT_PLAYER: CombatantStats = CombatantStats {
        max_hp: 300,
        attack: 60,
        defense: 25,
        crit_chance: 20,
    };
    pub const DEFAULT_BOSS: CombatantStats = CombatantStats {
        max_hp: 700,
        attack: 40,
        defense: 35,
        crit_chance: 10,
    };
    pub const DEFAULT_BOSS_NAME: &'static str = "Boss";

    pub fn new() -> Self {
        Self {
            player: Self::DEFAULT_PLAYER,
            boss_name: Self::DEFAULT_BOSS_NAME.to_string(),
            boss: Self::DEFAULT_BOSS,
            player_attacks: vec![
                AttackDefinition::new("Sword Slash", 50),
                AttackDefinition::new("Fireball", 40),
                AttackDefinition::new("Lightning Strike", 60),
            ],
            boss_attacks: vec![
                AttackDefinition::new("Claw Swipe", 30),
                AttackDefinition::new("Tail Whip", 25),
                AttackDefinition::new("Fire Breath", 50),
            ],
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
