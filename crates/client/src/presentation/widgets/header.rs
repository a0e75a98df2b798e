//! Header bar with the game title and current phase.

use game_core::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, phase: Phase, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("CAVE ADVENTURE", theme.title()),
        Span::styled(format!("  ·  {}", phase_label(phase)), theme.muted()),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(header, area);
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Start => "Title",
        Phase::Story1 => "Chapter I",
        Phase::Story2 => "Chapter II",
        Phase::Story3 => "Chapter III",
        Phase::Battle => "Battle",
        Phase::Win => "Victory",
        Phase::Lose => "Defeat",
    }
}
