//! Move directions and derived game states

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::io::error::{EngineError, invalid_parameter};

/// A direction to slide and merge tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
}

impl Direction {
    /// Every direction, in a fixed order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Whether the move slides along rows
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether lines are walked from their far end
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    /// Lowercase name used for parsing and display
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Pick a direction uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..4u8) {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Up,
            _ => Self::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            _ => Err(invalid_parameter(
                "direction",
                &s,
                &"expected one of left, right, up, down",
            )),
        }
    }
}

/// Game state derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Moves are still accepted
    Playing,
    /// The winning tile is on the board
    Win,
    /// The board is full and no neighbours match
    Lose,
}

impl GameState {
    /// Whether the game has ended
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Win => "win",
            Self::Lose => "lose",
        })
    }
}
