//! Mobility-based position evaluation.

use amazons_core::{Board, Color};

/// Score of a decided game (positive when White has won).
/// No mobility difference can come close to it.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// Bound outside every score; opens the alpha-beta window.
pub const INFINITY: i32 = i32::MAX;

/// Evaluates the position from White's point of view.
///
/// Returns:
/// - `±WINNING_VALUE` once the game is decided
/// - otherwise White's legal move count minus Black's
pub fn evaluate(board: &Board) -> i32 {
    match board.winner() {
        Some(Color::White) => WINNING_VALUE,
        Some(Color::Black) => -WINNING_VALUE,
        None => board.mobility(Color::White) as i32 - board.mobility(Color::Black) as i32,
    }
}
