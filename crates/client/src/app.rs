//! Glue code tying the session, key bindings, and terminal UI together.
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::{GameSession, InputEvent, Phase, RngOracle, StepOutcome, TurnReport};
use tokio::time::{self, Duration};

use crate::{
    config::UiConfig,
    input::{InputHandler, KeyAction},
    message::MessageLog,
    presentation::{terminal::Tui, ui},
};

/// Owns the session and everything the UI shows next to it.
pub struct App<R: RngOracle> {
    session: GameSession<R>,
    messages: MessageLog,
    input: InputHandler,
    frame_interval: Duration,
}

impl<R: RngOracle> App<R> {
    pub fn new(session: GameSession<R>, ui: &UiConfig) -> Self {
        Self {
            session,
            messages: MessageLog::new(ui.message_capacity),
            input: InputHandler::new(),
            frame_interval: Duration::from_millis(ui.frame_interval_ms),
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Drives the game until the session finishes.
    ///
    /// Returns the session so the caller can inspect the final state.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<GameSession<R>> {
        tracing::info!(phase = %self.session.phase(), "game loop starting");
        ui::render(terminal, &self.session.snapshot(), &self.messages)?;

        while !self.session.is_finished() {
            time::sleep(self.frame_interval).await;

            if self.handle_input_tick()? {
                ui::render(terminal, &self.session.snapshot(), &self.messages)?;
            }
        }

        self.log_summary();
        Ok(self.session)
    }

    /// Drains pending terminal events. Returns whether a redraw is needed.
    fn handle_input_tick(&mut self) -> Result<bool> {
        let mut redraw = false;

        while !self.session.is_finished() && term_event::poll(Duration::ZERO)? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    redraw |= self.handle_key(key);
                }
                TermEvent::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        Ok(redraw)
    }

    /// Maps one key press to a game event and applies it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(self.session.phase(), key) {
            KeyAction::Submit(event) => self.submit(event),
            KeyAction::None => false,
        }
    }

    /// Applies `event` to the session. Returns whether anything changed.
    pub fn submit(&mut self, event: InputEvent) -> bool {
        match self.session.handle(event) {
            StepOutcome::Ignored => {
                tracing::debug!(%event, phase = %self.session.phase(), "event ignored");
                false
            }
            StepOutcome::Advanced { from, to } => {
                tracing::info!(%from, %to, "story advanced");
                if to == Phase::Battle {
                    let snapshot = self.session.snapshot();
                    self.messages.push_text(format!(
                        "{} stands before the {}.",
                        snapshot.player.name, snapshot.boss.name
                    ));
                }
                true
            }
            StepOutcome::Combat { report, phase } => {
                log_turn(&report);
                self.messages.record_turn(&report);
                if phase != Phase::Battle {
                    tracing::info!(
                        %phase,
                        rounds = self.messages.rounds(),
                        "battle finished"
                    );
                }
                true
            }
            StepOutcome::Exit => {
                tracing::info!(phase = %self.session.phase(), "player left the game");
                true
            }
        }
    }

    fn log_summary(&self) {
        match serde_json::to_string(&self.session.snapshot()) {
            Ok(json) => tracing::info!(snapshot = %json, "final session state"),
            Err(err) => tracing::warn!("failed to serialize session summary: {err}"),
        }
    }
}

fn log_turn(report: &TurnReport) {
    for strike in &report.strikes {
        tracing::info!(
            attacker = %strike.attacker_name,
            attack = %strike.attack_name,
            roll = strike.roll.roll,
            critical = strike.roll.critical,
            damage = strike.roll.damage,
            defender_hp = strike.defender_hp,
            "strike"
        );
    }
    if report.critical_hits() > 0 {
        tracing::info!(count = report.critical_hits(), "critical hits this step");
    }
    tracing::debug!(outcome = %report.outcome, next = %report.turn, "turn resolved");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use game_core::{GameConfig, ScriptedRng};

    fn app(rng: ScriptedRng) -> App<ScriptedRng> {
        let session = GameSession::new("Aria", &GameConfig::default(), rng).unwrap();
        App::new(session, &UiConfig::default())
    }

    fn press(app: &mut App<ScriptedRng>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn space_walks_the_story_into_battle() {
        let mut app = app(ScriptedRng::default());
        for _ in 0..4 {
            assert!(press(&mut app, KeyCode::Char(' ')));
        }
        assert_eq!(app.session().phase(), Phase::Battle);
        assert_eq!(app.messages().len(), 1);
    }

    #[test]
    fn attack_keys_outside_battle_do_nothing() {
        let mut app = app(ScriptedRng::default());
        assert!(!press(&mut app, KeyCode::Char('a')));
        assert_eq!(app.session().phase(), Phase::Start);
    }

    #[test]
    fn battle_key_records_combat_lines() {
        let mut app = app(ScriptedRng::default().pick(0).roll(100).pick(0).roll(100));
        for _ in 0..4 {
            press(&mut app, KeyCode::Char(' '));
        }
        assert!(press(&mut app, KeyCode::Char('b')));

        let texts: Vec<&str> = app.messages().iter().map(|e| e.text.as_str()).collect();
        assert!(texts.contains(&"Aria used Sword Slash! It dealt 15 damage."));
        assert!(texts.contains(&"Boss used Claw Swipe! It dealt 5 damage."));
        assert_eq!(app.messages().rounds(), 1);
    }

    #[test]
    fn quit_key_finishes_the_session() {
        let mut app = app(ScriptedRng::default());
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.session().is_finished());
    }
}
