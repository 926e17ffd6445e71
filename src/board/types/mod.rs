//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `Color` and `ColoredPiece` - piece identity
//! - `Square` - board coordinates and algebraic names
//! - `Move` - a single ply with everything needed to undo it

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;

pub(crate) use square::BOARD_SIZE;
