//! Capture search
//!
//! Pieces jump an adjacent opponent checker onto the empty square right behind
//! it, in any of the four diagonal directions. Kings capture at long range: the
//! first checker met along a ray may be jumped if it belongs to the opponent,
//! landing on any empty square beyond it before the next occupied one.

use std::fmt;

use log::trace;

use crate::board::Occupancy;
use crate::checker::{Checker, Player};
use crate::square::{Grid, Square};

/// One legal jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub from: Square,
    pub to: Square,
    /// Square of the jumped checker
    pub removed: Square,
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.from, self.to)
    }
}

/// Every capture available to `player`.
///
/// With `continuation` set, a capture chain is in progress and only the checker
/// standing there is considered.
pub fn find_captures(
    occupancy: &Occupancy,
    grid: Grid,
    player: Player,
    continuation: Option<Square>,
) -> Vec<Capture> {
    let mut out = Vec::new();

    match continuation {
        Some(sq) => {
            if let Some(&checker) = occupancy.get(&sq) {
                debug_assert_eq!(
                    checker.owner(),
                    player,
                    "continuation square held by the opponent"
                );
                captures_from(occupancy, grid, sq, checker, &mut out);
            }
        }
        None => {
            for (&sq, &checker) in occupancy.iter() {
                if checker.belongs_to(player) {
                    captures_from(occupancy, grid, sq, checker, &mut out);
                }
            }
        }
    }

    trace!("{} has {} capture(s)", player, out.len());
    out
}

/// True when `player` has at least one capture anywhere on the board.
pub fn has_capture(occupancy: &Occupancy, grid: Grid, player: Player) -> bool {
    let mut out = Vec::new();
    occupancy
        .iter()
        .filter(|(_, c)| c.belongs_to(player))
        .any(|(&sq, &checker)| {
            captures_from(occupancy, grid, sq, checker, &mut out);
            !out.is_empty()
        })
}

fn captures_from(
    occupancy: &Occupancy,
    grid: Grid,
    from: Square,
    checker: Checker,
    out: &mut Vec<Capture>,
) {
    let opponent = checker.owner().opponent();

    match checker {
        Checker::Piece(_) => {
            for (dir, over) in grid.neighbours(from) {
                let jumped = occupancy.get(&over).map_or(false, |c| c.belongs_to(opponent));
                if !jumped {
                    continue;
                }
                if let Some(landing) = grid.step(over, dir) {
                    if !occupancy.contains_key(&landing) {
                        out.push(Capture {
                            from,
                            to: landing,
                            removed: over,
                        });
                    }
                }
            }
        }
        Checker::King(_) => {
            for mut ray in grid.rays(from) {
                // Skip to the first occupied square along the ray
                let Some(over) = ray.by_ref().find(|sq| occupancy.contains_key(sq)) else {
                    continue;
                };
                if !occupancy[&over].belongs_to(opponent) {
                    continue;
                }
                for landing in ray.take_while(|sq| !occupancy.contains_key(sq)) {
                    out.push(Capture {
                        from,
                        to: landing,
                        removed: over,
                    });
                }
            }
        }
    }
}
