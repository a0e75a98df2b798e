//! Session aggregate owned by the event loop.

use crate::config::GameConfig;
use crate::engine::{GameEngine, StepOutcome};
use crate::env::{AttackTables, GameEnv, PcgRng, RngOracle};
use crate::error::SetupError;
use crate::state::{GameSnapshot, GameState, InputEvent, Phase};

/// One run of the game: state, attack tables and the RNG oracle.
///
/// The surrounding loop calls [`GameSession::handle`] once per input event
/// and [`GameSession::snapshot`] once per frame. After an exit the session
/// is finished and ignores further events.
#[derive(Clone, Debug)]
pub struct GameSession<R: RngOracle = PcgRng> {
    state: GameState,
    attacks: AttackTables,
    rng: R,
    finished: bool,
}

impl<R: RngOracle> GameSession<R> {
    /// Builds a fresh session at [`Phase::Start`] from configuration.
    pub fn new(
        player_name: impl Into<String>,
        config: &GameConfig,
        rng: R,
    ) -> Result<Self, SetupError> {
        let state = GameState::from_config(player_name, config)?;
        let attacks = AttackTables::from_config(config)?;
        Ok(Self::from_parts(state, attacks, rng))
    }

    /// Assembles a session around an existing state, e.g. a mid-battle scenario.
    pub fn from_parts(state: GameState, attacks: AttackTables, rng: R) -> Self {
        Self {
            state,
            attacks,
            rng,
            finished: false,
        }
    }

    /// Feeds one input event through the engine.
    pub fn handle(&mut self, event: InputEvent) -> StepOutcome {
        if self.finished {
            return StepOutcome::Ignored;
        }

        let mut env = GameEnv::new(&self.attacks, &mut self.rng);
        let outcome = GameEngine::new(&mut self.state).execute(&mut env, event);

        if outcome.is_exit() {
            self.finished = true;
        }
        outcome
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}
