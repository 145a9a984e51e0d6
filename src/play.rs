//! Move execution: the state machine that turns one board into the next.
//!
//! A Running board goes to Running, Won or Drawn; Won and Drawn accept nothing.
//! After a capture the same checker keeps jumping while it can, unless the
//! capture crowned it, which always ends the turn.

use log::debug;

use crate::board::{Board, Phase, Running};
use crate::captures::find_captures;
use crate::error::MoveError;
use crate::movegen;
use crate::square::Square;
use crate::terminal::{is_draw, is_win};

impl Board {
    /// Apply the move `from` to `to` for the player to move and return the
    /// resulting board. On error `self` is still the current position.
    pub fn play(&self, from: Square, to: Square) -> Result<Board, MoveError> {
        let result = self.try_play(from, to);
        match &result {
            Ok(next) => debug!("{}-{}: {}", from, to, next.phase()),
            Err(e) => debug!("{}-{} rejected: {}", from, to, e),
        }
        result
    }

    fn try_play(&self, from: Square, to: Square) -> Result<Board, MoveError> {
        let Phase::Running(running) = *self.phase() else {
            return Err(MoveError::GameOver);
        };
        let grid = self.grid();
        let occupancy = self.occupancy();

        for sq in [from, to] {
            if !grid.contains(sq) {
                return Err(MoveError::OffGrid(sq));
            }
        }
        let checker = self.checker_at(from).ok_or(MoveError::NoChecker(from))?;
        if !checker.belongs_to(running.turn) {
            return Err(MoveError::NotOwner(from));
        }
        if self.is_occupied(to) {
            return Err(MoveError::OccupiedTarget(to));
        }

        let captures = find_captures(occupancy, grid, running.turn, running.previous_capture);
        let capture = match captures.first() {
            Some(first) => Some(
                *captures
                    .iter()
                    .find(|c| c.from == from && c.to == to)
                    .ok_or(MoveError::MandatoryCapture(first.from))?,
            ),
            None => {
                if !movegen::destinations(occupancy, grid, from).contains(&to) {
                    return Err(MoveError::IllegalMove { from, to });
                }
                None
            }
        };

        // Everything is validated; build the next position
        let mut next = occupancy.clone();
        next.remove(&from);

        let moves_without_capture = match capture {
            Some(c) => {
                next.remove(&c.removed);
                0
            }
            None => running.moves_without_capture + 1,
        };
        let number_of_moves = running.number_of_moves + 1;

        let crowned = !checker.is_king() && to.row == grid.crowning_row(running.turn);
        next.insert(to, if crowned { checker.promote() } else { checker });

        if capture.is_some()
            && !crowned
            && !find_captures(&next, grid, running.turn, Some(to)).is_empty()
        {
            let phase = Phase::Running(Running {
                number_of_moves,
                moves_without_capture,
                previous_capture: Some(to),
                turn: running.turn,
            });
            return Ok(Board::from_parts(*self.params(), next, phase));
        }

        let phase = if is_win(&next, grid, running.turn) {
            Phase::Won {
                winner: running.turn,
            }
        } else if is_draw(moves_without_capture, self.params().draw_threshold) {
            Phase::Drawn
        } else {
            Phase::Running(Running {
                number_of_moves,
                moves_without_capture,
                previous_capture: None,
                turn: running.turn.opponent(),
            })
        };

        Ok(Board::from_parts(*self.params(), next, phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{Checker, Player};
    use crate::params::GameParams;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(turn: Player, checkers: &[(&str, Checker)]) -> Board {
        let checkers: Vec<_> = checkers.iter().map(|&(s, c)| (sq(s), c)).collect();
        Board::with_checkers(GameParams::default(), turn, &checkers).unwrap()
    }

    #[test]
    fn quiet_move_passes_the_turn() {
        let start = Board::standard();
        let next = start.play(sq("3c"), sq("4d")).unwrap();
        let running = next.running().unwrap();
        assert_eq!(running.turn, Player::Black);
        assert_eq!(running.number_of_moves, 1);
        assert_eq!(running.moves_without_capture, 1);
        assert_eq!(running.previous_capture, None);
        assert_eq!(next.checker_at(sq("3c")), None);
        assert_eq!(next.checker_at(sq("4d")), Some(Checker::piece(Player::White)));
        // The original is untouched
        assert_eq!(start.checker_at(sq("3c")), Some(Checker::piece(Player::White)));
    }

    #[test]
    fn rejections_in_order() {
        let start = Board::standard();
        assert_eq!(start.play(sq("4d"), sq("5c")), Err(MoveError::NoChecker(sq("4d"))));
        assert_eq!(start.play(sq("6b"), sq("5a")), Err(MoveError::NotOwner(sq("6b"))));
        assert_eq!(start.play(sq("2b"), sq("3c")), Err(MoveError::OccupiedTarget(sq("3c"))));
        assert_eq!(
            start.play(sq("3c"), sq("5e")),
            Err(MoveError::IllegalMove {
                from: sq("3c"),
                to: sq("5e")
            })
        );
        assert_eq!(start.play(sq("9a"), sq("4d")), Err(MoveError::OffGrid(sq("9a"))));
    }

    #[test]
    fn far_off_grid_squares_are_reported() {
        // Rejections are formatted by the debug log line as well
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
        let start = Board::standard();
        for from in [Square::new(255, 0), Square::new(0, 200), Square::new(255, 255)] {
            let err = start.play(from, sq("4d")).unwrap_err();
            assert_eq!(err, MoveError::OffGrid(from));
            assert!(err.to_string().contains("is not on the board"));
        }
    }

    #[test]
    fn piece_cannot_step_backwards() {
        let b = board(
            Player::White,
            &[
                ("4d", Checker::piece(Player::White)),
                ("8h", Checker::piece(Player::Black)),
            ],
        );
        assert!(matches!(
            b.play(sq("4d"), sq("3c")),
            Err(MoveError::IllegalMove { .. })
        ));
    }

    #[test]
    fn single_capture_passes_the_turn() {
        let b = board(
            Player::White,
            &[
                ("4d", Checker::piece(Player::White)),
                ("5c", Checker::piece(Player::Black)),
                ("8h", Checker::piece(Player::Black)),
            ],
        );
        let next = b.play(sq("4d"), sq("6b")).unwrap();
        assert_eq!(next.checker_at(sq("5c")), None);
        assert_eq!(next.checker_at(sq("6b")), Some(Checker::piece(Player::White)));
        let running = next.running().unwrap();
        assert_eq!(running.turn, Player::Black);
        assert_eq!(running.moves_without_capture, 0);
        assert_eq!(running.previous_capture, None);
    }

    #[test]
    fn capture_chain_keeps_the_turn() {
        let b = board(
            Player::White,
            &[
                ("4d", Checker::piece(Player::White)),
                ("5c", Checker::piece(Player::Black)),
                ("7c", Checker::piece(Player::Black)),
                ("8h", Checker::piece(Player::Black)),
            ],
        );
        let mid = b.play(sq("4d"), sq("6b")).unwrap();
        let running = mid.running().unwrap();
        assert_eq!(running.turn, Player::White);
        assert_eq!(running.previous_capture, Some(sq("6b")));
        assert_eq!(running.number_of_moves, 1);

        // The chain must be continued by the same checker
        assert_eq!(mid.captures().len(), 1);
        let done = mid.play(sq("6b"), sq("8d")).unwrap();
        assert_eq!(done.checker_at(sq("8d")), Some(Checker::king(Player::White)));
        assert_eq!(done.checker_at(sq("7c")), None);
        let running = done.running().unwrap();
        assert_eq!(running.turn, Player::Black);
        assert_eq!(running.number_of_moves, 2);
        assert_eq!(running.moves_without_capture, 0);
    }

    #[test]
    fn other_checkers_cannot_interrupt_a_chain() {
        let b = board(
            Player::White,
            &[
                ("4d", Checker::piece(Player::White)),
                ("5c", Checker::piece(Player::Black)),
                ("7c", Checker::piece(Player::Black)),
                ("2f", Checker::piece(Player::White)),
                ("3g", Checker::piece(Player::Black)),
            ],
        );
        let mid = b.play(sq("4d"), sq("6b")).unwrap();
        assert_eq!(
            mid.play(sq("2f"), sq("4h")),
            Err(MoveError::MandatoryCapture(sq("6b")))
        );
    }

    #[test]
    fn quiet_move_refused_while_a_capture_exists() {
        let b = board(
            Player::White,
            &[
                ("4d", Checker::piece(Player::White)),
                ("5c", Checker::piece(Player::Black)),
                ("3g", Checker::piece(Player::White)),
            ],
        );
        assert_eq!(
            b.play(sq("3g"), sq("4h")),
            Err(MoveError::MandatoryCapture(sq("4d")))
        );
        assert_eq!(
            b.play(sq("4d"), sq("5e")),
            Err(MoveError::MandatoryCapture(sq("4d")))
        );
    }

    #[test]
    fn crowning_capture_ends_the_turn() {
        // From 8b the new king could jump 5e along the long diagonal
        let b = board(
            Player::White,
            &[
                ("6d", Checker::piece(Player::White)),
                ("7c", Checker::piece(Player::Black)),
                ("5e", Checker::piece(Player::Black)),
            ],
        );
        let next = b.play(sq("6d"), sq("8b")).unwrap();
        assert_eq!(next.checker_at(sq("8b")), Some(Checker::king(Player::White)));
        let running = next.running().unwrap();
        assert_eq!(running.turn, Player::Black);
        assert_eq!(running.previous_capture, None);
    }

    #[test]
    fn king_keeps_chaining_on_the_back_row() {
        let b = board(
            Player::White,
            &[
                ("6d", Checker::king(Player::White)),
                ("7c", Checker::piece(Player::Black)),
                ("5e", Checker::piece(Player::Black)),
            ],
        );
        let next = b.play(sq("6d"), sq("8b")).unwrap();
        let running = next.running().unwrap();
        assert_eq!(running.turn, Player::White);
        assert_eq!(running.previous_capture, Some(sq("8b")));
    }

    #[test]
    fn quiet_promotion() {
        let b = board(
            Player::Black,
            &[
                ("2b", Checker::piece(Player::Black)),
                ("8h", Checker::king(Player::White)),
            ],
        );
        let next = b.play(sq("2b"), sq("1c")).unwrap();
        assert_eq!(next.checker_at(sq("1c")), Some(Checker::king(Player::Black)));
        assert_eq!(next.turn(), Some(Player::White));
    }

    #[test]
    fn capturing_the_last_checker_wins() {
        let b = board(
            Player::White,
            &[
                ("4d", Checker::piece(Player::White)),
                ("5c", Checker::piece(Player::Black)),
            ],
        );
        let next = b.play(sq("4d"), sq("6b")).unwrap();
        assert_eq!(next.phase(), &Phase::Won { winner: Player::White });
        assert_eq!(next.winner(), Some(Player::White));
        assert_eq!(next.turn(), None);
        assert_eq!(next.play(sq("6b"), sq("7a")), Err(MoveError::GameOver));
    }

    #[test]
    fn draw_threshold_from_params() {
        let params = GameParams::new().draw_threshold(1);
        let b = Board::with_checkers(
            params,
            Player::White,
            &[
                (sq("1a"), Checker::king(Player::White)),
                (sq("8b"), Checker::king(Player::Black)),
            ],
        )
        .unwrap();
        let next = b.play(sq("1a"), sq("2b")).unwrap();
        assert_eq!(next.phase(), &Phase::Drawn);
        assert!(next.play(sq("8b"), sq("7a")).unwrap_err().is_state_misuse());
    }
}
