//! Players and the checkers they own.

use std::fmt;
use std::ops::Not;

use crate::square::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The two diagonal directions a Piece of this player may step into.
    /// White starts on the low rows and moves up the board.
    #[inline]
    pub fn forward(self) -> [Direction; 2] {
        match self {
            Player::White => [Direction::UpLeft, Direction::UpRight],
            Player::Black => [Direction::DownLeft, Direction::DownRight],
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A checker on the board: a regular Piece or a crowned King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checker {
    Piece(Player),
    King(Player),
}

impl Checker {
    #[inline]
    pub fn piece(owner: Player) -> Checker {
        Checker::Piece(owner)
    }

    #[inline]
    pub fn king(owner: Player) -> Checker {
        Checker::King(owner)
    }

    #[inline]
    pub fn owner(self) -> Player {
        match self {
            Checker::Piece(p) | Checker::King(p) => p,
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Checker::King(_))
    }

    #[inline]
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner() == player
    }

    /// Crown a Piece. Kings are returned unchanged.
    #[inline]
    pub fn promote(self) -> Checker {
        Checker::King(self.owner())
    }

    /// Single-character symbol: `w`/`b` for pieces, `W`/`B` for kings.
    pub fn symbol(self) -> char {
        match self {
            Checker::Piece(Player::White) => 'w',
            Checker::Piece(Player::Black) => 'b',
            Checker::King(Player::White) => 'W',
            Checker::King(Player::Black) => 'B',
        }
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checker::Piece(p) => write!(f, "{} piece", p),
            Checker::King(p) => write!(f, "{} king", p),
        }
    }
}
