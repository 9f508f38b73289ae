//! Lazy move generation.
//!
//! Nothing here builds a move list up front: a full position can have a couple
//! of thousand moves, while the winner check only needs to know whether one
//! exists. Legal moves are three nested iterators (amazons, their destinations,
//! and spear throws from each destination) flattened into one.

use std::iter::FusedIterator;

use crate::{board::Board, types::*};

/// Squares reachable from one square by an unblocked queen move.
///
/// Yields the rays in [`DIRECTIONS`] order, nearest square first, and moves on
/// to the next ray at the first occupied or off-board square.
#[derive(Clone, Debug)]
pub struct ReachableFrom<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: u8,
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.dir < DIRECTIONS.len() {
            self.steps += 1;
            match self.from.queen_move(self.dir, self.steps) {
                Some(sq) if self.board.is_passable(sq, self.as_empty) => return Some(sq),
                _ => {
                    self.dir += 1;
                    self.steps = 0;
                }
            }
        }
        None
    }
}

impl FusedIterator for ReachableFrom<'_> {}

impl Board {
    /// Squares reachable from `from`, whatever (if anything) stands on it.
    /// `as_empty` is treated as empty; pass the origin of a move here to
    /// enumerate its spear throws.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom {
            board: self,
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.legal_moves_for(self.turn())
    }

    /// All moves `side` could make in this position, whether or not it is its turn.
    /// Amazons are visited in canonical square order.
    pub fn legal_moves_for(&self, side: Color) -> impl Iterator<Item = Move> + '_ {
        let amazon = Piece::from(side);
        Square::all()
            .filter(move |&sq| self.get(sq) == amazon)
            .flat_map(move |from| {
                self.reachable_from(from, None).flat_map(move |to| {
                    self.reachable_from(to, Some(from))
                        .map(move |spear| Move::new(from, to, spear))
                })
            })
    }

    pub fn has_legal_move(&self, side: Color) -> bool {
        self.legal_moves_for(side).next().is_some()
    }

    /// Number of legal moves for `side`.
    pub fn mobility(&self, side: Color) -> usize {
        self.legal_moves_for(side).count()
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
