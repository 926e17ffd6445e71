//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use simple_chess::board::prelude::*;
//! ```

pub use super::{
    find_best_move, Board, Color, ColoredPiece, FenError, Move, MoveParseError, Piece, Searcher,
    Square, SquareError,
};
