//! Event dispatch for the phase machine and the battle loop.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. It looks the
//! incoming event up in the transition table and either ignores it, moves to
//! the next story phase, resolves one battle step, or reports that the game
//! should end.

mod transition;
mod turns;

pub use turns::{BattleOutcome, TurnReport, resolve_turn};

use crate::env::GameEnv;
use crate::state::{GameState, InputEvent, Phase, Turn};

use transition::Transition;

/// Complete outcome of feeding one event to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// Event does not apply to the current phase; nothing changed.
    Ignored,
    /// Story progressed.
    Advanced { from: Phase, to: Phase },
    /// A battle step was resolved; `phase` is the phase after it.
    Combat { report: TurnReport, phase: Phase },
    /// The player left, or confirmed a terminal screen.
    Exit,
}

impl StepOutcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Game engine that applies input events to a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Applies `event` to the state.
    ///
    /// Entering `Battle` resets the turn marker to the player.
    pub fn execute(&mut self, env: &mut GameEnv<'_>, event: InputEvent) -> StepOutcome {
        let from = self.state.phase;

        match transition::lookup(from, event) {
            Transition::Ignore => StepOutcome::Ignored,
            Transition::Exit => StepOutcome::Exit,
            Transition::Goto(to) => {
                if to == Phase::Battle {
                    self.state.turn = Turn::Player;
                }
                self.state.phase = to;
                StepOutcome::Advanced { from, to }
            }
            Transition::Fight => {
                let report = self.fight(env);
                self.state.phase = report.outcome.phase();
                StepOutcome::Combat {
                    report,
                    phase: self.state.phase,
                }
            }
        }
    }

    fn fight(&mut self, env: &mut GameEnv<'_>) -> TurnReport {
        let (attacks, rng) = env.parts();
        let GameState {
            turn, player, boss, ..
        } = &mut *self.state;

        let report = resolve_turn(player, boss, *turn, &attacks.player, &attacks.boss, rng);
        *turn = report.turn;
        report
    }
}
