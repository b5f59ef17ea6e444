use core::fmt;

use arrayvec::ArrayVec;
use itertools::iproduct;

use crate::consts::BOARD_SIZE;

/// A cell of the board. Row 0 is rank 8 (black's back rank), column 0 is file a.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Square(pub u8);

pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Longest run of cells strictly between two squares on one line
pub const MAX_BETWEEN: usize = BOARD_SIZE - 2;

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self((row * BOARD_SIZE + col) as u8)
    }

    /// Bounds-checked construction from signed coordinates
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let range = 0..BOARD_SIZE as i32;
        (range.contains(&row) && range.contains(&col)).then(|| Self::new(row as usize, col as usize))
    }

    /// Row of the grid, counted from black's side
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Column of the grid (file a is 0)
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }

    /// Rank number as printed on a board, 1 through 8
    pub fn rank(self) -> usize {
        BOARD_SIZE - self.row()
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col() as u8) as char
    }

    /// Calculates the (Chebyshev) distance between two squares
    #[rustfmt::skip]
    pub fn dist(self, other: Square) -> usize {
        self.col().abs_diff(other.col())
            .max(self.row().abs_diff(other.row()))
    }

    /// Cells strictly between `self` and `other`, walking from `self`. Empty unless both squares
    /// share a row, a column or a diagonal.
    pub fn between(self, other: Square) -> ArrayVec<Square, MAX_BETWEEN> {
        let mut path = ArrayVec::new();
        let d_row = other.row() as i32 - self.row() as i32;
        let d_col = other.col() as i32 - self.col() as i32;
        let on_line = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
        if self == other || !on_line {
            return path;
        }

        let (step_row, step_col) = (d_row.signum(), d_col.signum());
        let (mut row, mut col) = (self.row() as i32 + step_row, self.col() as i32 + step_col);
        while (row, col) != (other.row() as i32, other.col() as i32) {
            path.push(Square::new(row as usize, col as usize));
            row += step_row;
            col += step_col;
        }
        path
    }

    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        iproduct!(0..BOARD_SIZE, 0..BOARD_SIZE).map(|(row, col)| Self::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}
