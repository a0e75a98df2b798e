//! Combat log panel.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::message::{MessageEntry, MessageLog};
use crate::presentation::theme::Theme;

/// Render the most recent messages, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Combat Log "),
        )
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its round, if any.
fn format_message(entry: &MessageEntry) -> String {
    match entry.round {
        Some(round) => format!("[{round:>3}] {}", entry.text),
        None => entry.text.clone(),
    }
}
