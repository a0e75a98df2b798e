//! Footer widget displaying phase-sensitive key bindings.

use game_core::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, phase: Phase, theme: &Theme) {
    let spans: Vec<Span> = bindings(phase)
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, theme.key_hint()),
                Span::styled(format!(" {action}  "), theme.muted()),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(theme.border()));

    frame.render_widget(paragraph, area);
}

/// `(key, action)` pairs valid in `phase`.
pub fn bindings(phase: Phase) -> &'static [(&'static str, &'static str)] {
    match phase {
        Phase::Start | Phase::Story1 | Phase::Story2 | Phase::Story3 => {
            &[("Space", "Continue"), ("q/Esc", "Quit")]
        }
        Phase::Battle => &[("Space/a/b/c", "Attack"), ("q/Esc", "Quit")],
        Phase::Win | Phase::Lose => &[("Space", "Exit"), ("q/Esc", "Quit")],
    }
}
