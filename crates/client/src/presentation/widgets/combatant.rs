//! Combatant panel: status summary over a health bar.

use game_core::CombatantView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render one combatant. `active` highlights the side whose turn it is.
pub fn render(frame: &mut Frame, area: Rect, view: &CombatantView, active: bool, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.combatant_border(active))
        .title(format!(" {} ", view.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(view.summary.as_str()), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(theme.health_bar())
        .ratio(view.hp_ratio().clamp(0.0, 1.0))
        .label(format!("{}/{}", view.hp, view.max_hp));
    frame.render_widget(gauge, rows[1]);
}
