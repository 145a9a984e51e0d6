//! Board state: who stands where, and what phase the game is in.
//!
//! A [`Board`] is an immutable value. [`Board::play`](crate::play) returns a new
//! board and leaves the old one untouched, so any board can be kept as a
//! snapshot of the game at that point.

use std::collections::BTreeMap;
use std::fmt;

use crate::captures::{find_captures, Capture};
use crate::checker::{Checker, Player};
use crate::error::SetupError;
use crate::movegen;
use crate::params::GameParams;
use crate::square::{Grid, Square};

/// Checkers by square. Keys are always playable squares of the board's grid.
pub type Occupancy = BTreeMap<Square, Checker>;

/// Bookkeeping of a game still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Running {
    pub number_of_moves: u32,
    pub moves_without_capture: u32,
    /// Landing square of a capture whose chain must be continued by the same checker
    pub previous_capture: Option<Square>,
    pub turn: Player,
}

impl Running {
    /// Fresh game, White to move.
    pub fn initial() -> Self {
        Self {
            number_of_moves: 0,
            moves_without_capture: 0,
            previous_capture: None,
            turn: Player::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running(Running),
    Won { winner: Player },
    Drawn,
}

impl Phase {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::Running(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Running(r) => match r.previous_capture {
                Some(sq) => write!(f, "{} to continue capturing from {}", r.turn, sq),
                None => write!(f, "{} to move", r.turn),
            },
            Phase::Won { winner } => write!(f, "won by {}", winner),
            Phase::Drawn => write!(f, "drawn"),
        }
    }
}

/// A requested step from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl From<Capture> for Move {
    fn from(c: Capture) -> Self {
        Move::new(c.from, c.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    params: GameParams,
    occupancy: Occupancy,
    phase: Phase,
}

impl Board {
    /// Starting position: each player fills the playable squares of its
    /// `size / 2 - 1` home rows with pieces, White to move.
    pub fn new(params: GameParams) -> Result<Self, SetupError> {
        params.validate()?;
        Ok(Self::starting_position(params))
    }

    /// The 8×8 starting position with a draw after 20 quiet moves.
    pub fn standard() -> Self {
        Self::starting_position(GameParams::default())
    }

    /// Fill the home rows for already validated `params`.
    fn starting_position(params: GameParams) -> Self {
        let home_rows = params.home_rows();
        let occupancy = params
            .grid()
            .playable_squares()
            .filter_map(|sq| {
                if sq.row < home_rows {
                    Some((sq, Checker::piece(Player::White)))
                } else if sq.row >= params.size - home_rows {
                    Some((sq, Checker::piece(Player::Black)))
                } else {
                    None
                }
            })
            .collect();

        Self {
            params,
            occupancy,
            phase: Phase::Running(Running::initial()),
        }
    }

    /// A custom position with `turn` to move and both counters at zero.
    pub fn with_checkers(
        params: GameParams,
        turn: Player,
        checkers: &[(Square, Checker)],
    ) -> Result<Self, SetupError> {
        params.validate()?;
        let grid = params.grid();

        let mut occupancy = Occupancy::new();
        for &(sq, checker) in checkers {
            if !grid.contains(sq) {
                return Err(SetupError::OffGrid(sq));
            }
            if !grid.is_playable(sq) {
                return Err(SetupError::NotPlayable(sq));
            }
            if occupancy.insert(sq, checker).is_some() {
                return Err(SetupError::DuplicateSquare(sq));
            }
        }

        Ok(Self {
            params,
            occupancy,
            phase: Phase::Running(Running {
                turn,
                ..Running::initial()
            }),
        })
    }

    pub(crate) fn from_parts(params: GameParams, occupancy: Occupancy, phase: Phase) -> Self {
        Self {
            params,
            occupancy,
            phase,
        }
    }

    #[inline]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.params.grid()
    }

    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    #[inline]
    pub fn checker_at(&self, sq: Square) -> Option<Checker> {
        self.occupancy.get(&sq).copied()
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupancy.contains_key(&sq)
    }

    /// Squares and checkers of one player, row by row.
    pub fn checkers_of(&self, player: Player) -> impl Iterator<Item = (Square, Checker)> + '_ {
        self.occupancy
            .iter()
            .filter(move |(_, c)| c.belongs_to(player))
            .map(|(&sq, &c)| (sq, c))
    }

    pub fn count(&self, player: Player) -> usize {
        self.checkers_of(player).count()
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn running(&self) -> Option<&Running> {
        match &self.phase {
            Phase::Running(r) => Some(r),
            _ => None,
        }
    }

    /// Player to move, `None` once the game is over.
    #[inline]
    pub fn turn(&self) -> Option<Player> {
        self.running().map(|r| r.turn)
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won { winner } => Some(winner),
            _ => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
}

// Queries for the player to move
impl Board {
    /// Captures available to the player to move, restricted to the chaining
    /// checker while a capture chain is in progress. Empty once the game is over.
    pub fn captures(&self) -> Vec<Capture> {
        match &self.phase {
            Phase::Running(r) => {
                find_captures(&self.occupancy, self.grid(), r.turn, r.previous_capture)
            }
            _ => Vec::new(),
        }
    }

    /// Where the checker on `from` may legally go this turn: its capture
    /// landings when a capture is mandatory, its quiet moves otherwise.
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        let Some(running) = self.running() else {
            return Vec::new();
        };
        match self.checker_at(from) {
            Some(c) if c.belongs_to(running.turn) => {}
            _ => return Vec::new(),
        }

        let captures = self.captures();
        if captures.is_empty() {
            movegen::destinations(&self.occupancy, self.grid(), from)
        } else {
            captures
                .into_iter()
                .filter(|c| c.from == from)
                .map(|c| c.to)
                .collect()
        }
    }

    /// Every move `play` would accept right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        let Some(running) = self.running() else {
            return Vec::new();
        };

        let captures = self.captures();
        if !captures.is_empty() {
            return captures.into_iter().map(Move::from).collect();
        }

        let grid = self.grid();
        self.checkers_of(running.turn)
            .flat_map(|(from, _)| {
                movegen::destinations(&self.occupancy, grid, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}

// Boards compare by occupancy alone
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.occupancy == other.occupancy
    }
}

impl Eq for Board {}

// Text grid, top row first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        let size = grid.size();
        for row in (0..size).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..size {
                let sq = Square::new(row, col);
                match self.checker_at(sq) {
                    Some(c) => write!(f, "{} ", c.symbol())?,
                    None if grid.is_playable(sq) => write!(f, ". ")?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..size {
            write!(f, "{} ", (b'a' + col) as char)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.phase)
    }
}
