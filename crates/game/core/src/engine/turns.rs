use arrayvec::ArrayVec;

use crate::combat::{Strike, resolve_damage};
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{AttackTable, Combatant, Phase, Turn};

/// Terminal check after a battle step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Continue,
    Win,
    Lose,
}

impl BattleOutcome {
    /// Phase the machine moves to for this outcome.
    pub const fn phase(self) -> Phase {
        match self {
            Self::Continue => Phase::Battle,
            Self::Win => Phase::Win,
            Self::Lose => Phase::Lose,
        }
    }

    /// Lose wins ties so a double knock-out is never reported as a victory.
    pub fn evaluate(player: &Combatant, boss: &Combatant) -> Self {
        if !player.is_alive() {
            Self::Lose
        } else if !boss.is_alive() {
            Self::Win
        } else {
            Self::Continue
        }
    }
}

/// Everything that happened during one attack input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn marker after the step.
    pub turn: Turn,
    pub outcome: BattleOutcome,
    /// Applied attacks in order: the player's, then the boss's counter if any.
    pub strikes: ArrayVec<Strike, { GameConfig::MAX_STRIKES_PER_TURN }>,
}

impl TurnReport {
    pub fn critical_hits(&self) -> usize {
        self.strikes.iter().filter(|s| s.roll.critical).count()
    }
}

/// Resolve one attack input.
///
/// On the player's turn the player strikes the boss and the marker passes to
/// the boss. If it is then the boss's turn and the boss is still standing,
/// the boss counter-attacks within the same step and the marker returns to
/// the player. A single input can therefore apply damage twice.
pub fn resolve_turn(
    player: &mut Combatant,
    boss: &mut Combatant,
    mut turn: Turn,
    player_attacks: &AttackTable,
    boss_attacks: &AttackTable,
    rng: &mut dyn RngOracle,
) -> TurnReport {
    let mut strikes = ArrayVec::new();

    if turn == Turn::Player {
        strikes.push(strike(Turn::Player, player, boss, player_attacks, rng));
        turn = turn.toggled();
    }

    if turn == Turn::Boss && boss.is_alive() {
        strikes.push(strike(Turn::Boss, boss, player, boss_attacks, rng));
        turn = turn.toggled();
    }

    TurnReport {
        turn,
        outcome: BattleOutcome::evaluate(player, boss),
        strikes,
    }
}

/// Pick an attack, roll for a critical, and apply the damage.
fn strike(
    side: Turn,
    attacker: &Combatant,
    defender: &mut Combatant,
    table: &AttackTable,
    rng: &mut dyn RngOracle,
) -> Strike {
    let attack = table.choose(rng);
    let roll = resolve_damage(
        attack.base_damage,
        defender.defense(),
        attacker.crit_chance(),
        rng,
    );
    defender.apply_damage(roll.damage);

    Strike {
        attacker: side,
        attacker_name: attacker.name().to_string(),
        attack_name: attack.name.clone(),
        base_damage: attack.base_damage,
        roll,
        defender_hp: defender.current_hp(),
    }
}
