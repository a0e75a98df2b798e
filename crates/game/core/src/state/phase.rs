//! Phase, turn marker and input event vocabulary.

/// Node of the story/combat state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Start,
    Story1,
    Story2,
    Story3,
    Battle,
    Win,
    Lose,
}

impl Phase {
    /// Start and the three story beats: phases that only wait for `Advance`.
    pub const fn is_story(self) -> bool {
        matches!(self, Self::Start | Self::Story1 | Self::Story2 | Self::Story3)
    }

    /// Win or Lose: the next `Advance` ends the program.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Which side acts next during `Battle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    #[default]
    Player,
    Boss,
}

impl Turn {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Player => Self::Boss,
            Self::Boss => Self::Player,
        }
    }
}

/// Discrete action delivered by the input port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Continue the story, or leave a terminal screen.
    Advance,
    /// Strike during `Battle`.
    Attack,
    /// Leave immediately from any phase.
    Quit,
}
