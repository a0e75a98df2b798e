//! Phase transition table.

use crate::state::{InputEvent, Phase};

/// What the engine should do with an event in the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Transition {
    /// Event does not apply to this phase.
    Ignore,
    /// Move to the next story phase.
    Goto(Phase),
    /// Resolve one battle step.
    Fight,
    /// Leave the game.
    Exit,
}

/// Looks up the transition for `(phase, event)`.
///
/// Every pair is listed explicitly, so adding a phase or an event fails to
/// compile until its row is written.
pub(super) fn lookup(phase: Phase, event: InputEvent) -> Transition {
    use InputEvent::{Advance, Attack, Quit};

    match (phase, event) {
        (_, Quit) => Transition::Exit,

        (Phase::Start, Advance) => Transition::Goto(Phase::Story1),
        (Phase::Story1, Advance) => Transition::Goto(Phase::Story2),
        (Phase::Story2, Advance) => Transition::Goto(Phase::Story3),
        (Phase::Story3, Advance) => Transition::Goto(Phase::Battle),
        (Phase::Battle, Attack) => Transition::Fight,
        (Phase::Win | Phase::Lose, Advance) => Transition::Exit,

        (Phase::Battle, Advance) => Transition::Ignore,
        (
            Phase::Start
            | Phase::Story1
            | Phase::Story2
            | Phase::Story3
            | Phase::Win
            | Phase::Lose,
            Attack,
        ) => Transition::Ignore,
    }
}
