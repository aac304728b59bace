use std::fmt;

use super::error::TicTacToeError;

pub const CELL_COUNT: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Free,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Free => None,
        }
    }

    pub fn from_value(value: u8) -> Result<Self, TicTacToeError> {
        match value {
            0 => Ok(Mark::Free),
            1 => Ok(Mark::X),
            2 => Ok(Mark::O),
            other => Err(TicTacToeError::InvalidBoard(format!(
                "illegal marker value {}",
                other
            ))),
        }
    }

    pub fn to_value(self) -> u8 {
        match self {
            Mark::Free => 0,
            Mark::X => 1,
            Mark::O => 2,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Free => write!(f, "-"),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Tied,
    XWins,
    OWins,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWins => Some(Mark::X),
            GameStatus::OWins => Some(Mark::O),
            GameStatus::Playing | GameStatus::Tied => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Tied => write!(f, "tied"),
            GameStatus::XWins => write!(f, "X wins"),
            GameStatus::OWins => write!(f, "O wins"),
        }
    }
}
