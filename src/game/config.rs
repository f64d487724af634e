use std::fmt;
use std::ops::Range;

/// Number of guesses a player gets in either mode
pub const DEFAULT_ATTEMPTS: usize = 6;

/// The two supported equation lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameMode {
    Mini,
    Regular,
}

/// Immutable description of one game mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub element_count: usize,
    pub attempts: usize,
    /// Zero-based indices the `=` character may occupy
    pub equal_sign_positions: Range<usize>,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Mini, GameMode::Regular];

    pub fn element_count(self) -> usize {
        match self {
            GameMode::Mini => 6,
            GameMode::Regular => 8,
        }
    }

    pub fn attempts(self) -> usize {
        DEFAULT_ATTEMPTS
    }

    /// The expression spans between half the equation and all but two
    /// characters, so at least one result digit always remains.
    pub fn equal_sign_positions(self) -> Range<usize> {
        let n = self.element_count();
        n / 2..n - 1
    }

    pub fn config(self) -> GameConfig {
        GameConfig {
            mode: self,
            element_count: self.element_count(),
            attempts: self.attempts(),
            equal_sign_positions: self.equal_sign_positions(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Mini => "mini",
            GameMode::Regular => "regular",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<GameMode> for GameConfig {
    fn from(mode: GameMode) -> Self {
        mode.config()
    }
}
