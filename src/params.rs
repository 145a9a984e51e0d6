//! Game parameters
//!
//! Controls the board geometry and the draw rule. Every board carries its own
//! copy, so several grid sizes can coexist in one process.

use crate::error::SetupError;
use crate::square::{Grid, MAX_SIZE};

/// Quiet moves (both players combined) after which the game is drawn.
pub const DEFAULT_DRAW_THRESHOLD: u32 = 20;

pub const DEFAULT_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameParams {
    /// Rows and columns of the grid. Even, between 2 and 26.
    pub size: u8,

    /// Moves without a capture that end the game in a draw
    pub draw_threshold: u32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            draw_threshold: DEFAULT_DRAW_THRESHOLD,
        }
    }
}

impl GameParams {
    /// Create new params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size
    pub fn size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    /// Set the number of quiet moves that draws the game
    pub fn draw_threshold(mut self, moves: u32) -> Self {
        self.draw_threshold = moves;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.size < 2 || self.size > MAX_SIZE {
            return Err(SetupError::SizeOutOfRange(self.size));
        }
        if self.size % 2 != 0 {
            return Err(SetupError::OddSize(self.size));
        }
        Ok(())
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        Grid::new(self.size)
    }

    /// Rows each player fills at the start: everything except the two middle rows.
    #[inline]
    pub fn home_rows(&self) -> u8 {
        self.size / 2 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = GameParams::new();
        assert_eq!(params.size, 8);
        assert_eq!(params.draw_threshold, 20);
        assert_eq!(params.home_rows(), 3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let params = GameParams::new().size(10).draw_threshold(50);
        assert_eq!(params.size, 10);
        assert_eq!(params.draw_threshold, 50);
        assert_eq!(params.grid().size(), 10);
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(GameParams::new().size(7).validate(), Err(SetupError::OddSize(7)));
        assert_eq!(GameParams::new().size(0).validate(), Err(SetupError::SizeOutOfRange(0)));
        assert_eq!(GameParams::new().size(28).validate(), Err(SetupError::SizeOutOfRange(28)));
        assert!(GameParams::new().size(2).validate().is_ok());
        assert!(GameParams::new().size(26).validate().is_ok());
    }
}
