use std::fmt;
use std::str::FromStr;

use crate::error::{AmazonsError, AmazonsResult};
use crate::types::*;

// Rows 1..9 print as their digit, the tenth row as '0', so every square is two characters.
fn row_char(row: u8) -> char {
    if row == SIZE - 1 {
        '0'
    } else {
        (b'1' + row) as char
    }
}

fn row_of_char(c: u8) -> Option<u8> {
    match c {
        b'1'..=b'9' => Some(c - b'1'),
        b'0' => Some(SIZE - 1),
        _ => None,
    }
}

fn square_from_bytes(b: &[u8]) -> Option<Square> {
    if b.len() != 2 || !(b'a'..b'a' + SIZE).contains(&b[0]) {
        return None;
    }
    Square::new(b[0] - b'a', row_of_char(b[1])?)
}

pub fn square_to_coord(sq: Square) -> String {
    let c = (b'a' + sq.col()) as char;
    format!("{c}{}", row_char(sq.row()))
}

pub fn coord_to_square(c: &str) -> Option<Square> {
    square_from_bytes(c.as_bytes())
}

pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

/// Parses `<col><row>-<col><row>(<col><row>)`. Only the syntax is checked, not legality.
pub fn parse_move(txt: &str) -> AmazonsResult<Move> {
    let malformed = || AmazonsError::MalformedMove(txt.to_string());
    let b = txt.as_bytes();
    if b.len() != 9 || b[2] != b'-' || b[5] != b'(' || b[8] != b')' {
        return Err(malformed());
    }
    let from = square_from_bytes(&b[0..2]).ok_or_else(malformed)?;
    let to = square_from_bytes(&b[3..5]).ok_or_else(malformed)?;
    let spear = square_from_bytes(&b[6..8]).ok_or_else(malformed)?;
    Ok(Move::new(from, to, spear))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_coord(*self))
    }
}

impl FromStr for Square {
    type Err = AmazonsError;

    fn from_str(s: &str) -> AmazonsResult<Square> {
        coord_to_square(s).ok_or_else(|| AmazonsError::InvalidSquare(s.to_string()))
    }
}

impl TryFrom<String> for Square {
    type Error = AmazonsError;

    fn try_from(s: String) -> AmazonsResult<Square> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        square_to_coord(sq)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.origin(), self.destination(), self.spear())
    }
}

impl FromStr for Move {
    type Err = AmazonsError;

    fn from_str(s: &str) -> AmazonsResult<Move> {
        parse_move(s)
    }
}

impl TryFrom<String> for Move {
    type Error = AmazonsError;

    fn try_from(s: String) -> AmazonsResult<Move> {
        parse_move(&s)
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> String {
        mv.to_string()
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
