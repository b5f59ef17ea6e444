use core::fmt;
use std::str::FromStr;

use crate::{error::Error, moves::notation, types::square::Square};

/// A proposed relocation of one piece. Built per legality check and never stored by the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    origin: Square,
    dest: Square,
}

impl Move {
    pub const fn new(origin: Square, dest: Square) -> Self {
        Self { origin, dest }
    }

    #[inline(always)]
    pub fn origin_square(&self) -> Square {
        self.origin
    }

    #[inline(always)]
    pub fn dest_square(&self) -> Square {
        self.dest
    }

    /// Signed row change; negative means toward black's side
    pub fn row_delta(&self) -> i32 {
        self.dest.row() as i32 - self.origin.row() as i32
    }

    /// Signed column change; positive means toward file h
    pub fn col_delta(&self) -> i32 {
        self.dest.col() as i32 - self.origin.col() as i32
    }

    /// To coordinate notation, the inverse of `notation::parse`
    pub fn to_notation(self) -> String {
        let mut str = self.origin.to_string();
        str += &self.dest.to_string();
        str
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
