//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board with pseudo-legal move generation and a material-only
//! alpha-beta search. King safety, castling, en passant and promotion choice
//! are not part of the rules implemented here.
//!
//! # Example
//! ```
//! use simple_chess::board::{find_best_move, Board};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} moves", moves.len());
//! let best = find_best_move(&mut board, 2);
//! assert!(best.is_some());
//! ```

mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveGenError, MoveParseError, SquareError};
pub use fen::{decode_layout, STARTING_PLACEMENT};
pub use make_unmake::MoveGuard;
pub use state::{Board, Layout};
pub use types::{Color, ColoredPiece, Move, Piece, Square};

// Public API - search functions and reporting
pub use search::{
    find_best_move, SearchInfo, SearchLogger, SearchResult, SearchStats, Searcher, SCORE_INFINITY,
};

pub(crate) use types::BOARD_SIZE;
