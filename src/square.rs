//! Board geometry: squares, diagonal directions and rays on an N×N grid.
//!
//! Squares are plain `(row, col)` values, both 0-based. Row 0 is the row White
//! starts on; column 0 is the `a` file. The text form is `<row-number><column-letter>`
//! with a 1-based row number, so `Square::new(2, 2)` prints as `3c`.
//!
//! Only squares where the 1-based row number plus the column index is odd are
//! playable, which makes the bottom-left corner `1a` a playable square.

use std::fmt;
use std::str::FromStr;

use crate::checker::Player;
use crate::error::SquareParseError;

/// Largest supported grid: columns are lettered `a` to `z`.
pub const MAX_SIZE: u8 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The square one diagonal step away, if it does not fall off the low edges.
    /// The high edges are checked by [`Grid::step`].
    #[inline]
    fn offset(self, dir: Direction) -> Option<Square> {
        let row = self.row as i16 + dir.row_delta() as i16;
        let col = self.col as i16 + dir.col_delta() as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u16::from(self.row) + 1)?;
        if self.col < MAX_SIZE {
            write!(f, "{}", (b'a' + self.col) as char)
        } else {
            // No letter left: off-grid squares print their 1-based column number
            write!(f, ":{}", u16::from(self.col) + 1)
        }
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parse `<row-number><column-letter>`, e.g. `3c` or `10j`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SquareParseError::Empty);
        }

        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| SquareParseError::BadColumn(s.to_string()))?;
        let (digits, letters) = s.split_at(split);

        let row: u8 = digits
            .parse()
            .map_err(|_| SquareParseError::BadRow(s.to_string()))?;
        if row == 0 || row > MAX_SIZE {
            return Err(SquareParseError::BadRow(s.to_string()));
        }

        let mut chars = letters.chars();
        let col = match (chars.next(), chars.next()) {
            (Some(c @ 'a'..='z'), None) => c as u8 - b'a',
            _ => return Err(SquareParseError::BadColumn(s.to_string())),
        };

        Ok(Square::new(row - 1, col))
    }
}

/// The four diagonal directions. "Up" means towards higher rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    pub fn row_delta(self) -> i8 {
        match self {
            Direction::UpLeft | Direction::UpRight => 1,
            Direction::DownLeft | Direction::DownRight => -1,
        }
    }

    #[inline]
    pub fn col_delta(self) -> i8 {
        match self {
            Direction::UpLeft | Direction::DownLeft => -1,
            Direction::UpRight | Direction::DownRight => 1,
        }
    }
}

/// A square N×N grid with alternating coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u8,
}

impl Grid {
    #[inline]
    pub const fn new(size: u8) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(self) -> u8 {
        self.size
    }

    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        sq.row < self.size && sq.col < self.size
    }

    /// True for the dark squares checkers stand on.
    #[inline]
    pub fn is_playable(self, sq: Square) -> bool {
        self.contains(sq) && (sq.row + sq.col) % 2 == 0
    }

    /// Parse a square and check it lies on this grid.
    pub fn parse_square(self, s: &str) -> Result<Square, SquareParseError> {
        let sq: Square = s.parse()?;
        if !self.contains(sq) {
            return Err(SquareParseError::OffGrid {
                square: sq,
                size: self.size,
            });
        }
        Ok(sq)
    }

    #[inline]
    pub fn step(self, sq: Square, dir: Direction) -> Option<Square> {
        sq.offset(dir).filter(|&next| self.contains(next))
    }

    /// Diagonal neighbours that exist on the grid (two at a corner, four inside).
    pub fn neighbours(self, sq: Square) -> impl Iterator<Item = (Direction, Square)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(sq, dir).map(|n| (dir, n)))
    }

    /// Squares along one diagonal, nearest first, up to the edge.
    #[inline]
    pub fn ray(self, from: Square, dir: Direction) -> Ray {
        Ray {
            grid: self,
            dir,
            cursor: from,
        }
    }

    /// The four rays out of `from`, in [`Direction::ALL`] order.
    pub fn rays(self, from: Square) -> [Ray; 4] {
        Direction::ALL.map(|dir| self.ray(from, dir))
    }

    #[inline]
    pub fn is_first_row(self, sq: Square) -> bool {
        sq.row == 0
    }

    #[inline]
    pub fn is_last_row(self, sq: Square) -> bool {
        self.size > 0 && sq.row == self.size - 1
    }

    /// The row a player's pieces start from.
    #[inline]
    pub fn home_row(self, player: Player) -> u8 {
        match player {
            Player::White => 0,
            Player::Black => self.size - 1,
        }
    }

    /// The row where a player's pieces are crowned (the opponent's home row).
    #[inline]
    pub fn crowning_row(self, player: Player) -> u8 {
        self.home_row(player.opponent())
    }

    /// All playable squares, row by row from the first row.
    pub fn playable_squares(self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Square::new(row, col)))
            .filter(move |&sq| self.is_playable(sq))
    }
}

/// Lazy iterator over a diagonal ray, excluding the origin square.
#[derive(Debug, Clone)]
pub struct Ray {
    grid: Grid,
    dir: Direction,
    cursor: Square,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let next = self.grid.step(self.cursor, self.dir)?;
        self.cursor = next;
        Some(next)
    }
}
