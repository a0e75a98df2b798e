//! Combat log shown under the battle panels.
use std::collections::VecDeque;

use game_core::{BattleOutcome, TurnReport};

/// Styling hint for a log line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Critical,
    Victory,
    Defeat,
}

/// One line of the combat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Battle round the line belongs to, if any.
    pub round: Option<u32>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, round: Option<u32>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            round,
            level,
        }
    }
}

/// Bounded buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    round: u32,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            round: 0,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Appends the lines for one battle step: critical notices, strikes,
    /// and the outcome if the battle ended.
    pub fn record_turn(&mut self, report: &TurnReport) {
        self.round += 1;
        let round = Some(self.round);

        for strike in &report.strikes {
            if let Some(notice) = strike.critical_notice() {
                self.push(MessageEntry::new(notice, round, MessageLevel::Critical));
            }
            self.push(MessageEntry::new(strike.describe(), round, MessageLevel::Info));
        }

        match report.outcome {
            BattleOutcome::Continue => {}
            BattleOutcome::Win => self.push(MessageEntry::new(
                "The monster collapses.",
                round,
                MessageLevel::Victory,
            )),
            BattleOutcome::Lose => self.push(MessageEntry::new(
                "You fall to the cave floor.",
                round,
                MessageLevel::Defeat,
            )),
        }
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Battle rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.round
    }
}
