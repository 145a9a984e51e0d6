//! Damista: a checkers rules engine.
//!
//! Pieces step diagonally forward and capture in all four diagonal directions;
//! kings slide and capture at any range. Captures are mandatory, a capturing
//! checker keeps jumping while it can, and a piece crowned by a capture ends
//! its turn there. A player with nothing left to move loses; a run of quiet
//! moves with no capture draws the game.
//!
//! ```
//! use damista::{Board, Phase, Player};
//!
//! let board = Board::standard();
//! let next = board.play("3c".parse().unwrap(), "4d".parse().unwrap()).unwrap();
//! assert_eq!(next.turn(), Some(Player::Black));
//! assert!(matches!(next.phase(), Phase::Running(_)));
//! ```

pub mod board;
pub mod captures;
pub mod checker;
pub mod error;
pub mod movegen;
pub mod params;
pub mod perft;
pub mod play;
pub mod square;
pub mod terminal;

pub use board::{Board, Move, Occupancy, Phase, Running};
pub use captures::Capture;
pub use checker::{Checker, Player};
pub use error::{MoveError, SetupError, SquareParseError};
pub use params::GameParams;
pub use square::{Direction, Grid, Square};
