//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-event mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{InputEvent, Phase};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed the event to the session.
    Submit(InputEvent),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game events.
///
/// Space advances the story and confirms the ending screens. During the
/// battle, Space and `a`/`b`/`c` attack.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a game event for the given phase.
    pub fn handle_key(&self, phase: Phase, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Submit(InputEvent::Quit);
        }

        match key.code {
            KeyCode::Esc => KeyAction::Submit(InputEvent::Quit),
            KeyCode::Char(ch) => self.handle_char(phase, ch),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, phase: Phase, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match (phase, ch) {
            (_, 'q') => KeyAction::Submit(InputEvent::Quit),
            (Phase::Battle, ' ' | 'a' | 'b' | 'c') => KeyAction::Submit(InputEvent::Attack),
            (_, ' ') => KeyAction::Submit(InputEvent::Advance),
            _ => KeyAction::None,
        }
    }
}
