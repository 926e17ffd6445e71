//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

pub(crate) const BOARD_SIZE: usize = 8;

const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS: [char; BOARD_SIZE] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Algebraic names for all 64 squares, indexed by `row * 8 + col`.
static ALGEBRAIC: Lazy<Vec<String>> = Lazy::new(|| {
    (0..64)
        .map(|idx| format!("{}{}", FILES[idx % BOARD_SIZE], RANKS[idx / BOARD_SIZE]))
        .collect()
});

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is rank 1 and col 0 is file a. Squares can only be obtained through
/// the lookup table, so both coordinates are always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Every square in row-major order (a1, b1, ..., h1, a2, ..., h8).
    pub const ALL: [Square; 64] = {
        let mut all = [Square { row: 0, col: 0 }; 64];
        let mut idx = 0;
        while idx < 64 {
            all[idx] = Square {
                row: (idx / BOARD_SIZE) as u8,
                col: (idx % BOARD_SIZE) as u8,
            };
            idx += 1;
        }
        all
    };

    /// Look up the square at `(row, col)`.
    ///
    /// Out-of-range coordinates are a precondition violation and are reported,
    /// never clamped.
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, SquareError> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Self::ALL[row * BOARD_SIZE + col])
    }

    /// Signed variant used by the move generator while walking offsets.
    #[inline]
    pub(crate) fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if on_board(row, col) {
            Some(Self::ALL[row as usize * BOARD_SIZE + col as usize])
        } else {
            None
        }
    }

    /// Row index (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Index into row-major order (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Algebraic name such as `"e4"`.
    #[must_use]
    pub fn algebraic(self) -> &'static str {
        ALGEBRAIC[self.index()].as_str()
    }
}

/// Shared bounds predicate for every move rule.
#[inline]
pub(crate) const fn on_board(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algebraic())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = FILES.iter().position(|&f| f == file).ok_or_else(invalid)?;
        let row = RANKS.iter().position(|&r| r == rank).ok_or_else(invalid)?;
        Square::from_row_col(row, col)
    }
}
