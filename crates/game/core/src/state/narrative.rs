//! Story text shown for each phase.
//!
//! Kept beside the phase machine so every front-end tells the same story.

use super::{Phase, Turn};

const START: &[&str] = &["Press SPACE to start the game"];

const STORY_1: &[&str] = &[
    "You are a brave adventurer seeking fame and fortune.",
    "After hearing rumors of a mysterious cave, you decide to explore it.",
    "Press SPACE to continue...",
];

const STORY_2: &[&str] = &[
    "Deep in the cave, you find ancient writings hinting at a hidden treasure.",
    "Suddenly, a loud roar echoes through the cave. You ready your weapon.",
    "Press SPACE to continue...",
];

const STORY_3: &[&str] = &[
    "A monstrous creature emerges from the shadows, blocking your path.",
    "You must defeat the monster to reach the treasure.",
    "Press SPACE to battle...",
];

const WIN: &[&str] = &["Victory! You defeated the monster and claimed the treasure!"];

const LOSE: &[&str] = &["Game Over! The monster defeated you."];

/// Narration for a phase. `Battle` has none; use [`battle_prompt`] there.
pub fn story_lines(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Start => START,
        Phase::Story1 => STORY_1,
        Phase::Story2 => STORY_2,
        Phase::Story3 => STORY_3,
        Phase::Battle => &[],
        Phase::Win => WIN,
        Phase::Lose => LOSE,
    }
}

/// Prompt shown under the combatant panels.
pub fn battle_prompt(turn: Turn) -> &'static str {
    match turn {
        Turn::Player => "Player's Turn: Press SPACE to attack",
        Turn::Boss => "Monster's Turn: Press SPACE to defend yourself",
    }
}
