//! Perft: count the boards reachable in exactly `depth` plays.
//!
//! Every step of a capture chain is its own play, and finished games are
//! leaves: a won or drawn board counts once, wherever it occurs.

use crate::board::{Board, Move};

impl Board {
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 || self.is_over() {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .filter_map(|mv| self.play(mv.from, mv.to).ok())
            .map(|next| next.perft(depth - 1))
            .sum()
    }

    /// Perft split by first move, in `legal_moves` order.
    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves()
            .into_iter()
            .filter_map(|mv| {
                let next = self.play(mv.from, mv.to).ok()?;
                Some((mv, next.perft(depth - 1)))
            })
            .collect()
    }
}
