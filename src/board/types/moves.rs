//! Move record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::ColoredPiece;
use super::square::Square;

/// A single ply.
///
/// Carries everything `Board::revert` needs to undo the move, so no separate
/// undo record is kept. Equality and hashing cover all five fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: ColoredPiece,
    pub piece_captured: Option<ColoredPiece>,
    pub promotion: Option<ColoredPiece>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        piece_moved: ColoredPiece,
        piece_captured: Option<ColoredPiece>,
    ) -> Self {
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            promotion: None,
        }
    }

    /// Attach a promotion piece.
    #[inline]
    #[must_use]
    pub const fn with_promotion(self, promotion: ColoredPiece) -> Self {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// The piece that ends up on the destination square.
    #[inline]
    #[must_use]
    pub fn placed_piece(&self) -> ColoredPiece {
        self.promotion.unwrap_or(self.piece_moved)
    }
}

/// UCI long algebraic notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.piece.to_char())?;
        }
        Ok(())
    }
}
