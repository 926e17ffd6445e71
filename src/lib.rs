//! A small material-only chess engine.
//!
//! [`board`] holds the position model, pseudo-legal move generation and the
//! alpha-beta search; [`uci`] drives it over a line-oriented UCI subset.

pub mod board;
pub mod uci;

pub use board::{find_best_move, Board, Color, ColoredPiece, Move, Piece, Square};
