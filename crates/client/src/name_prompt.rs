//! Name entry screen shown before the story starts.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::terminal::Tui;

/// Longest name the box accepts.
pub const MAX_NAME_LEN: usize = 24;

/// Text box state for the name prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameInput {
    text: String,
}

/// Result of feeding one key to [`NameInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptStep {
    /// Keep editing.
    Editing,
    /// Enter was pressed; the name may be empty.
    Submitted(String),
    /// Esc or Ctrl+C.
    Cancelled,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, ch: char) {
        if !ch.is_control() && self.text.chars().count() < MAX_NAME_LEN {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptStep {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PromptStep::Cancelled;
        }

        match key.code {
            KeyCode::Enter => PromptStep::Submitted(self.text.clone()),
            KeyCode::Esc => PromptStep::Cancelled,
            KeyCode::Backspace => {
                self.backspace();
                PromptStep::Editing
            }
            KeyCode::Char(ch) => {
                self.push(ch);
                PromptStep::Editing
            }
            _ => PromptStep::Editing,
        }
    }
}

/// Block until the player submits a name. `None` means they backed out.
pub fn prompt_name(terminal: &mut Tui) -> Result<Option<String>> {
    let mut input = NameInput::new();

    loop {
        terminal.draw(|f| render(f, &input))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match input.handle_key(key) {
                PromptStep::Editing => {}
                PromptStep::Submitted(name) => return Ok(Some(name)),
                PromptStep::Cancelled => return Ok(None),
            }
        }
    }
}

fn render(frame: &mut Frame, input: &NameInput) {
    let area = centered(frame.area(), 50, 7);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(area);

    let label = Paragraph::new(Line::from(Span::styled(
        "Enter your name and press Enter:",
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, chunks[0]);

    let text = Paragraph::new(Line::from(vec![
        Span::styled(input.text(), Style::default().fg(Color::LightBlue)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(text, chunks[1]);
}

/// Rect of at most `width` x `height` centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(input: &mut NameInput, text: &str) {
        for ch in text.chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(ch))), PromptStep::Editing);
        }
    }

    #[test]
    fn typing_and_backspace_edit_the_name() {
        let mut input = NameInput::new();
        type_text(&mut input, "Arian");
        input.handle_key(key(KeyCode::Backspace));

        assert_eq!(input.text(), "Aria");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            PromptStep::Submitted("Aria".to_string())
        );
    }

    #[test]
    fn empty_name_can_be_submitted() {
        let mut input = NameInput::new();
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            PromptStep::Submitted(String::new())
        );
    }

    #[test]
    fn escape_cancels() {
        let mut input = NameInput::new();
        type_text(&mut input, "x");
        assert_eq!(input.handle_key(key(KeyCode::Esc)), PromptStep::Cancelled);
    }

    #[test]
    fn length_is_capped() {
        let mut input = NameInput::new();
        type_text(&mut input, &"z".repeat(MAX_NAME_LEN + 5));
        assert_eq!(input.text().chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn centered_rect_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = centered(area, 50, 7);
        assert_eq!(rect, Rect::new(0, 0, 20, 4));

        let rect = centered(Rect::new(0, 0, 100, 30), 50, 7);
        assert_eq!(rect, Rect::new(25, 11, 50, 7));
    }
}
