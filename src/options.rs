use crate::util::EnumExt;
use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Per-session gameplay configuration, chosen in the main menu
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    pub(crate) mode: GameMode,
    pub(crate) difficulty: Difficulty,
    pub(crate) obstacles: bool,
}

impl Options {
    pub(crate) fn get(&self, key: OptKey) -> OptValue {
        match key {
            OptKey::Mode => self.mode.into(),
            OptKey::Difficulty => self.difficulty.into(),
            OptKey::Obstacles => self.obstacles.into(),
        }
    }

    pub(crate) fn set(&mut self, key: OptKey, value: OptValue) {
        match key {
            OptKey::Mode => {
                self.mode = value
                    .try_into()
                    .expect("Options::set(Mode, value) called with non-GameMode value");
            }
            OptKey::Difficulty => {
                self.difficulty = value
                    .try_into()
                    .expect("Options::set(Difficulty, value) called with non-Difficulty value");
            }
            OptKey::Obstacles => {
                self.obstacles = value
                    .try_into()
                    .expect("Options::set(Obstacles, value) called with non-Bool value");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum OptKey {
    Mode,
    Difficulty,
    Obstacles,
}

impl OptKey {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            OptKey::Mode => "Mode",
            OptKey::Difficulty => "Difficulty",
            OptKey::Obstacles => "Obstacles",
        }
    }
}

impl fmt::Display for OptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[enum_dispatch]
pub(crate) trait Adjustable {
    fn increase(&mut self);
    fn decrease(&mut self);
    fn toggle(&mut self);
    fn can_increase(&self) -> bool;
    fn can_decrease(&self) -> bool;
}

#[enum_dispatch(Adjustable)] // This also gives us From and TryInto
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OptValue {
    Bool(bool),
    GameMode,
    Difficulty,
}

impl OptValue {
    pub(crate) const DISPLAY_WIDTH: u16 = 16;
}

// This is needed for EnumMap to be convenient to construct.
impl Default for OptValue {
    fn default() -> OptValue {
        OptValue::Bool(false)
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OptValue::Bool(false) => write!(f, "      [ ]       "),
            OptValue::Bool(true) => write!(f, "      [✓]       "),
            OptValue::GameMode(mode) => {
                write!(
                    f,
                    "{left} {mode:^12} {right}",
                    left = if mode.can_decrease() { '◀' } else { '◁' },
                    right = if mode.can_increase() { '▶' } else { '▷' }
                )
            }
            OptValue::Difficulty(diff) => {
                write!(
                    f,
                    "{left} {diff:^12} {right}",
                    left = if diff.can_decrease() { '◀' } else { '◁' },
                    right = if diff.can_increase() { '▶' } else { '▷' }
                )
            }
        }
    }
}

impl Adjustable for bool {
    fn increase(&mut self) {
        *self = true;
    }

    fn decrease(&mut self) {
        *self = false;
    }

    fn toggle(&mut self) {
        *self = !*self;
    }

    fn can_increase(&self) -> bool {
        !*self
    }

    fn can_decrease(&self) -> bool {
        *self
    }
}

/// The win condition for a game session
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum GameMode {
    /// Keep eating until you hit something
    #[default]
    Normal,

    /// Collect [`crate::consts::FOOD_TARGET`] food items before a
    /// [`crate::consts::TIME_LIMIT_SECONDS`]-second countdown expires
    LimitedTime,
}

impl GameMode {
    pub(crate) fn timed(self) -> bool {
        self == GameMode::LimitedTime
    }

    fn as_str(self) -> &'static str {
        match self {
            GameMode::Normal => "Normal",
            GameMode::LimitedTime => "Limited Time",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Adjustable for GameMode {
    fn increase(&mut self) {
        if let Some(mode) = self.next() {
            *self = mode;
        }
    }

    fn decrease(&mut self) {
        if let Some(mode) = self.prev() {
            *self = mode;
        }
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        self.next().is_some()
    }

    fn can_decrease(&self) -> bool {
        self.prev().is_some()
    }
}

/// Difficulty level; determines how often the snake moves
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,

    /// Starts at the Easy pace but speeds up as food is eaten
    Professional,
}

impl Difficulty {
    /// Time between movements of the snake at the start of a game
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Difficulty::Easy | Difficulty::Professional => Duration::from_millis(500),
            Difficulty::Medium => Duration::from_millis(300),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }

    /// Whether the tick period shortens as food is eaten
    pub(crate) fn speeds_up(self) -> bool {
        self == Difficulty::Professional
    }

    fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Professional => "Professional",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Adjustable for Difficulty {
    fn increase(&mut self) {
        if let Some(diff) = self.next() {
            *self = diff;
        }
    }

    fn decrease(&mut self) {
        if let Some(diff) = self.prev() {
            *self = diff;
        }
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        self.next().is_some()
    }

    fn can_decrease(&self) -> bool {
        self.prev().is_some()
    }
}
