use std::cell::OnceCell;
use std::fmt;

use tracing::debug;

use crate::error::{AmazonsError, AmazonsResult};
use crate::types::*;

/// Starting squares as (col, row).
pub const WHITE_START: [(u8, u8); 4] = [(0, 3), (9, 3), (3, 0), (6, 0)];
pub const BLACK_START: [(u8, u8); 4] = [(3, 9), (6, 9), (0, 6), (9, 6)];

#[derive(Clone, Debug)]
pub struct Board {
    grid: [Piece; NUM_SQUARES],
    turn: Color,
    moves: Vec<Move>,
    // Outer layer: computed or not. Inner: the winner, if any.
    winner: OnceCell<Option<Color>>,
}

impl Board {
    /// The initial position, White to move.
    pub fn new() -> Self {
        let mut b = Board::empty();
        b.reset();
        b
    }

    /// A board with no pieces at all, White to move.
    pub fn empty() -> Self {
        Board {
            grid: [Piece::Empty; NUM_SQUARES],
            turn: Color::White,
            moves: Vec::new(),
            winner: OnceCell::new(),
        }
    }

    /// Clears the board back to the initial position.
    pub fn reset(&mut self) {
        self.grid = [Piece::Empty; NUM_SQUARES];
        for (color, start) in [(Color::White, WHITE_START), (Color::Black, BLACK_START)] {
            for (col, row) in start {
                self.grid[(row * SIZE + col) as usize] = color.into();
            }
        }
        self.turn = Color::White;
        self.moves.clear();
        self.winner = OnceCell::new();
    }

    /// Reads a position in the format produced by `Display`: ten rows from the
    /// top, each holding ten whitespace-separated symbols `-`, `W`, `B` or `S`.
    /// Blank lines are ignored. The result has no move history.
    pub fn from_diagram(diagram: &str, turn: Color) -> AmazonsResult<Board> {
        let rows: Vec<&str> = diagram
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if rows.len() != SIZE as usize {
            return Err(AmazonsError::InvalidDiagram(format!(
                "expected {SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        board.turn = turn;
        for (i, line) in rows.iter().enumerate() {
            let row = SIZE as usize - 1 - i;
            let symbols: Vec<&str> = line.split_whitespace().collect();
            if symbols.len() != SIZE as usize {
                return Err(AmazonsError::InvalidDiagram(format!(
                    "row {} has {} squares",
                    row + 1,
                    symbols.len()
                )));
            }
            for (col, sym) in symbols.iter().enumerate() {
                let mut chars = sym.chars();
                let piece = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| {
                    AmazonsError::InvalidDiagram(format!(
                        "unknown symbol `{sym}` on row {}",
                        row + 1
                    ))
                })?;
                board.grid[row * SIZE as usize + col] = piece;
            }
        }
        Ok(board)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
        self.winner = OnceCell::new();
    }

    /// Number of moves applied and not undone.
    pub fn num_moves(&self) -> usize {
        self.moves.len()
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn get(&self, sq: Square) -> Piece {
        self.grid[sq.index()]
    }
    /// Overwrites a square directly, bypassing the rules. Meant for setting up positions.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.index()] = piece;
        self.winner = OnceCell::new();
    }

    pub(crate) fn is_passable(&self, sq: Square, as_empty: Option<Square>) -> bool {
        as_empty == Some(sq) || self.get(sq).is_empty()
    }

    /// True iff `from`-`to` is a queen move whose squares after `from`, up to and
    /// including `to`, are all empty. `as_empty` counts as empty whatever it holds.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        let Some(dir) = from.direction(to) else {
            return false;
        };
        (1..=from.distance(to)).all(|steps| match from.queen_move(dir, steps) {
            Some(sq) => self.is_passable(sq, as_empty),
            None => false,
        })
    }

    /// True iff `from` holds an amazon of the side to move.
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.get(from) == Piece::from(self.turn)
    }

    /// True iff `from`-`to` is a legal amazon move, ignoring the spear.
    pub fn is_legal_to(&self, from: Square, to: Square) -> bool {
        self.is_unblocked_move(from, to, None) && self.is_legal_from(from)
    }

    /// True iff `from`-`to`(`spear`) is a legal move. The vacated origin counts as
    /// empty for the throw, so the spear may pass over or land on it.
    pub fn is_legal_move(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_to(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_move(mv.origin(), mv.destination(), mv.spear())
    }

    /// Plays `mv` for the side to move, or rejects it untouched if it is illegal.
    pub fn make_move(&mut self, mv: Move) -> AmazonsResult<()> {
        if !self.is_legal(mv) {
            debug!(%mv, turn = %self.turn, "rejected illegal move");
            return Err(AmazonsError::IllegalMove {
                mv,
                turn: self.turn,
            });
        }
        self.apply(mv);
        Ok(())
    }

    /// Plays a move already known to be legal.
    pub(crate) fn apply(&mut self, mv: Move) {
        let amazon = self.get(mv.origin());
        self.grid[mv.origin().index()] = Piece::Empty;
        self.grid[mv.destination().index()] = amazon;
        self.grid[mv.spear().index()] = Piece::Spear;
        self.turn = self.turn.other();
        self.moves.push(mv);
        self.winner = OnceCell::new();
    }

    /// Takes back the last move. Does nothing on a board without history.
    pub fn undo(&mut self) {
        let Some(mv) = self.moves.pop() else {
            return;
        };
        let amazon = self.get(mv.destination());
        // The spear may sit on the origin, so clear it before putting the amazon back.
        self.grid[mv.spear().index()] = Piece::Empty;
        self.grid[mv.destination().index()] = Piece::Empty;
        self.grid[mv.origin().index()] = amazon;
        self.turn = self.turn.other();
        self.winner = OnceCell::new();
    }

    /// The side that has won, or `None` while both sides can still move.
    pub fn winner(&self) -> Option<Color> {
        *self.winner.get_or_init(|| {
            let side = self.turn;
            if !self.has_legal_move(side) {
                Some(side.other())
            } else if !self.has_legal_move(side.other()) {
                Some(side)
            } else {
                None
            }
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid && self.turn == other.turn && self.moves == other.moves
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            f.write_str("  ")?;
            for col in 0..SIZE {
                write!(f, " {}", self.grid[(row * SIZE + col) as usize].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
