//! Error types for chess board operations.

use super::Square;

/// Error type for square lookup and parsing failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    #[error("Row {row} out of bounds (must be 0-7)")]
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    #[error("Column {col} out of bounds (must be 0-7)")]
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for FEN parsing failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty position string
    #[error("Empty FEN string")]
    Empty,
    /// Invalid piece character in position string
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Placement does not have eight ranks
    #[error("FEN placement must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    /// A rank does not expand to eight files
    #[error("FEN rank {rank} has {files} files, expected 8")]
    BadRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
}

/// Error type for move parsing failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("Move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    /// Invalid square notation in move
    #[error("Invalid square notation in '{notation}'")]
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// Move is not available in the current position
    #[error("Illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for move generation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    /// Dispatch found no recognised piece on the square
    #[error("Trying to generate moves for an unknown piece on {square}")]
    UnknownPiece { square: Square },
}
