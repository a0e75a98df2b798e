//! Narration panel for the title, story beats and ending screens.

use game_core::{Phase, state::narrative};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::presentation::theme::Theme;

/// Render the narration for `phase`, vertically centred.
pub fn render(frame: &mut Frame, area: Rect, phase: Phase, theme: &Theme) {
    let lines = narrative::story_lines(phase);
    let style = theme.phase_text(phase);

    // Blank line between story lines, like separate paragraphs.
    let mut text: Vec<Line> = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push(Line::from(""));
        }
        text.push(Line::styled(*line, style));
    }

    let height = text.len() as u16;
    let top_padding = area.height.saturating_sub(height) / 2;
    let body = Rect {
        y: area.y + top_padding,
        height: area.height - top_padding,
        ..area
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, body);
}
