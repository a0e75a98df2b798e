//! Colour scheme for the terminal UI.

use game_core::{Phase, Turn};
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

/// Ratatui styles used across widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn story_text(&self) -> Style {
        Style::default().fg(Color::White)
    }

    /// Green for victory, red for defeat, plain text otherwise.
    pub fn phase_text(&self, phase: Phase) -> Style {
        match phase {
            Phase::Win => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Phase::Lose => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            _ => self.story_text(),
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    /// Filled part green, missing part red.
    pub fn health_bar(&self) -> Style {
        Style::default().fg(Color::Green).bg(Color::Red)
    }

    pub fn turn_prompt(&self, turn: Turn) -> Style {
        match turn {
            Turn::Player => Style::default().fg(Color::Yellow),
            Turn::Boss => Style::default().fg(Color::LightRed),
        }
    }

    /// Highlights the panel of the side about to act.
    pub fn combatant_border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Critical => Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            MessageLevel::Victory => Style::default().fg(Color::Green),
            MessageLevel::Defeat => Style::default().fg(Color::Red),
        }
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::Gray)
    }
}
