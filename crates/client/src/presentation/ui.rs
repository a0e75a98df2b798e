//! Main render entry point composing all widgets into one frame.
use anyhow::Result;
use game_core::{GameSnapshot, Phase, Turn, state::narrative};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::{
    message::MessageLog,
    presentation::{terminal::Tui, theme::Theme, widgets},
};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const COMBATANT_PANEL_HEIGHT: u16 = 4;

/// Render the terminal UI for the given snapshot.
///
/// Story and ending phases get a narration panel; the battle gets both
/// combatant panels, the turn prompt and the combat log.
pub fn render(terminal: &mut Tui, snapshot: &GameSnapshot, messages: &MessageLog) -> Result<()> {
    let theme = Theme;
    terminal.draw(|frame| draw(frame, snapshot, messages, &theme))?;
    Ok(())
}

fn draw(frame: &mut Frame, snapshot: &GameSnapshot, messages: &MessageLog, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], snapshot.phase, theme);

    match snapshot.phase {
        Phase::Battle => render_battle(frame, chunks[1], snapshot, messages, theme),
        // Ending screens keep the final log visible under the verdict.
        Phase::Win | Phase::Lose if !messages.is_empty() => {
            let body = split_body(chunks[1]);
            widgets::story::render(frame, body[0], snapshot.phase, theme);
            widgets::messages::render(frame, body[1], messages, theme);
        }
        phase => widgets::story::render(frame, chunks[1], phase, theme),
    }

    widgets::footer::render(frame, chunks[2], snapshot.phase, theme);
}

fn render_battle(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    messages: &MessageLog,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(COMBATANT_PANEL_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let player_turn = snapshot.turn == Turn::Player;
    widgets::combatant::render(frame, panels[0], &snapshot.player, player_turn, theme);
    widgets::combatant::render(frame, panels[1], &snapshot.boss, !player_turn, theme);

    let prompt = Paragraph::new(narrative::battle_prompt(snapshot.turn))
        .style(theme.turn_prompt(snapshot.turn))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, rows[1]);

    widgets::messages::render(frame, rows[2], messages, theme);
}

fn split_body(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, GameSession, InputEvent, ScriptedRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw_session(session: &GameSession<ScriptedRng>, messages: &MessageLog) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, &session.snapshot(), messages, &Theme))
            .unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn title_screen_shows_start_prompt() {
        let session =
            GameSession::new("Aria", &GameConfig::default(), ScriptedRng::default()).unwrap();
        let text = draw_session(&session, &MessageLog::new(8));

        assert!(text.contains("Press SPACE to start the game"));
        assert!(text.contains("CAVE ADVENTURE"));
    }

    #[test]
    fn battle_screen_shows_both_combatants() {
        let mut session =
            GameSession::new("Aria", &GameConfig::default(), ScriptedRng::default()).unwrap();
        for _ in 0..4 {
            session.handle(InputEvent::Advance);
        }
        let text = draw_session(&session, &MessageLog::new(8));

        assert!(text.contains("Aria (HP: 300/300, Atk: 60, Def: 25)"));
        assert!(text.contains("Boss (HP: 700/700, Atk: 40, Def: 35)"));
        assert!(text.contains(narrative::battle_prompt(Turn::Player)));
    }
}
