//! Quiet (non-capturing) move generation.
//!
//! Callers only consult these destinations once the capture search came back
//! empty for the player to move.

use crate::board::Occupancy;
use crate::checker::Checker;
use crate::square::{Grid, Square};

/// Empty squares the checker on `from` can step or slide to without capturing.
pub fn destinations(occupancy: &Occupancy, grid: Grid, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    if let Some(&checker) = occupancy.get(&from) {
        destinations_into(occupancy, grid, from, checker, &mut out);
    }
    out
}

/// True when the checker on `from` has at least one quiet move.
pub fn can_move(occupancy: &Occupancy, grid: Grid, from: Square) -> bool {
    match occupancy.get(&from) {
        Some(&Checker::Piece(owner)) => owner
            .forward()
            .into_iter()
            .filter_map(|dir| grid.step(from, dir))
            .any(|to| !occupancy.contains_key(&to)),
        Some(&Checker::King(_)) => grid
            .neighbours(from)
            .any(|(_, to)| !occupancy.contains_key(&to)),
        None => false,
    }
}

fn destinations_into(
    occupancy: &Occupancy,
    grid: Grid,
    from: Square,
    checker: Checker,
    out: &mut Vec<Square>,
) {
    match checker {
        Checker::Piece(owner) => {
            for dir in owner.forward() {
                if let Some(to) = grid.step(from, dir) {
                    if !occupancy.contains_key(&to) {
                        out.push(to);
                    }
                }
            }
        }
        Checker::King(_) => {
            for ray in grid.rays(from) {
                out.extend(ray.take_while(|sq| !occupancy.contains_key(sq)));
            }
        }
    }
}
