use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of squares on a side of the board.
pub const SIZE: u8 = 10;
pub const NUM_SQUARES: usize = (SIZE as usize) * (SIZE as usize);

/// Queen-move rays as (column delta, row delta), clockwise starting at north.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
    Spear,
}

impl Piece {
    /// The amazon of the opposing side.
    ///
    /// # Panics
    /// Panics for `Empty` and `Spear`, which belong to no side.
    pub fn opponent(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            other => panic!("{other:?} has no opponent"),
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Piece::White => Some(Color::White),
            Piece::Black => Some(Color::Black),
            Piece::Empty | Piece::Spear => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Spear => 'S',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            '-' => Some(Piece::Empty),
            'W' => Some(Piece::White),
            'B' => Some(Piece::Black),
            'S' => Some(Piece::Spear),
            _ => None,
        }
    }
}

impl From<Color> for Piece {
    fn from(c: Color) -> Piece {
        match c {
            Color::White => Piece::White,
            Color::Black => Piece::Black,
        }
    }
}

/// One of the 100 board cells, stored as its canonical index `row * 10 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    pub fn new(col: u8, row: u8) -> Option<Square> {
        if col < SIZE && row < SIZE {
            Some(Square(row * SIZE + col))
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Square> {
        if index < NUM_SQUARES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    fn at(col: i16, row: i16) -> Option<Square> {
        if (0..SIZE as i16).contains(&col) && (0..SIZE as i16).contains(&row) {
            Some(Square((row as u8) * SIZE + col as u8))
        } else {
            None
        }
    }

    pub fn col(self) -> u8 {
        self.0 % SIZE
    }
    pub fn row(self) -> u8 {
        self.0 / SIZE
    }
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All squares in canonical index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }

    fn delta(self, other: Square) -> (i16, i16) {
        (
            other.col() as i16 - self.col() as i16,
            other.row() as i16 - self.row() as i16,
        )
    }

    /// True iff `other` is a rook or bishop move of nonzero length away.
    pub fn is_queen_move(self, other: Square) -> bool {
        if self == other {
            return false;
        }
        let (dc, dr) = self.delta(other);
        dc == 0 || dr == 0 || dc.abs() == dr.abs()
    }

    /// Index into [`DIRECTIONS`] of the ray from `self` to `other`,
    /// or `None` if the two squares are not a queen move apart.
    pub fn direction(self, other: Square) -> Option<usize> {
        if !self.is_queen_move(other) {
            return None;
        }
        let (dc, dr) = self.delta(other);
        let unit = (dc.signum() as i8, dr.signum() as i8);
        DIRECTIONS.iter().position(|&d| d == unit)
    }

    /// Number of king steps between the two squares.
    pub fn distance(self, other: Square) -> u8 {
        let (dc, dr) = self.delta(other);
        dc.abs().max(dr.abs()) as u8
    }

    /// The square `steps` cells along `dir`, or `None` once the walk leaves the board.
    pub fn queen_move(self, dir: usize, steps: u8) -> Option<Square> {
        let (dc, dr) = *DIRECTIONS.get(dir)?;
        let steps = steps as i16;
        Square::at(
            self.col() as i16 + dc as i16 * steps,
            self.row() as i16 + dr as i16 * steps,
        )
    }
}

/// A complete turn: amazon from `from` to `to`, then a spear thrown to `spear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    pub fn new(from: Square, to: Square, spear: Square) -> Self {
        Self { from, to, spear }
    }

    pub fn origin(self) -> Square {
        self.from
    }
    pub fn destination(self) -> Square {
        self.to
    }
    pub fn spear(self) -> Square {
        self.spear
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
