//! Win and draw predicates, evaluated on the board left behind by a move.

use crate::board::Occupancy;
use crate::captures::has_capture;
use crate::checker::Player;
use crate::movegen::can_move;
use crate::square::Grid;

/// Did `mover` just win? The opponent is beaten when it has no capture and
/// either owns no checkers or none of its checkers can move.
pub fn is_win(occupancy: &Occupancy, grid: Grid, mover: Player) -> bool {
    let opponent = mover.opponent();
    if has_capture(occupancy, grid, opponent) {
        return false;
    }
    occupancy
        .iter()
        .filter(|(_, c)| c.belongs_to(opponent))
        .all(|(&sq, _)| !can_move(occupancy, grid, sq))
}

/// Quiet moves by both players since the last capture reached the threshold.
#[inline]
pub fn is_draw(moves_without_capture: u32, threshold: u32) -> bool {
    moves_without_capture >= threshold
}
