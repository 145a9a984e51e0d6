//! Error types returned by the engine.

use thiserror::Error;

use crate::square::{Square, MAX_SIZE};

/// Why a requested play was refused. The board it was requested on is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// `play` was called on a won or drawn board. This is a caller bug, not bad input.
    #[error("the game is already over")]
    GameOver,
    #[error("square {0} is not on the board")]
    OffGrid(Square),
    #[error("there is no checker on {0}")]
    NoChecker(Square),
    #[error("the checker on {0} belongs to the other player")]
    NotOwner(Square),
    #[error("square {0} is already occupied")]
    OccupiedTarget(Square),
    #[error("a capture is mandatory, available at {0}")]
    MandatoryCapture(Square),
    #[error("{from} to {to} is not a legal move")]
    IllegalMove { from: Square, to: Square },
}

impl MoveError {
    /// True for errors caused by driving a finished game, false for bad player input.
    pub fn is_state_misuse(&self) -> bool {
        matches!(self, MoveError::GameOver)
    }
}

/// Invalid game parameters or custom starting positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board size must be even, got {0}")]
    OddSize(u8),
    #[error("board size must be between 2 and {max}, got {0}", max = MAX_SIZE)]
    SizeOutOfRange(u8),
    #[error("square {0} is not on the board")]
    OffGrid(Square),
    #[error("square {0} is not a playable square")]
    NotPlayable(Square),
    #[error("square {0} was given twice")]
    DuplicateSquare(Square),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("empty square")]
    Empty,
    #[error("invalid row in square '{0}'")]
    BadRow(String),
    #[error("invalid column in square '{0}'")]
    BadColumn(String),
    #[error("square {square} is outside a {size}x{size} board")]
    OffGrid { square: Square, size: u8 },
}
