//! Pseudo-legal move generation.
//!
//! Every rule filters destinations by geometry and occupancy only; moves that
//! leave the mover's king attacked are still produced.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveGenError, Piece, Square};

/// Rook rays, as (row, col) steps.
pub(crate) const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Bishop rays.
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Queen rays and king steps: orthogonal first, then diagonal.
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    /// All pseudo-legal moves for the side to move.
    ///
    /// Squares are scanned in row-major order (a1, b1, ..., h8) and each
    /// piece's moves follow its rule's table order, so the result is
    /// deterministic.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        let color = self.side_to_move;
        let mut moves = Vec::new();
        for sq in Square::ALL {
            if Board::is_owned_by(color, self.piece_at(sq)) {
                self.push_piece_moves(sq, &mut moves);
            }
        }
        moves
    }

    /// Moves for the piece on `from`, following that piece's own color.
    ///
    /// Fails with [`MoveGenError::UnknownPiece`] when the square is empty.
    pub fn generate_piece_moves(&self, from: Square) -> Result<Vec<Move>, MoveGenError> {
        if self.is_empty(from) {
            return Err(MoveGenError::UnknownPiece { square: from });
        }
        let mut moves = Vec::new();
        self.push_piece_moves(from, &mut moves);
        Ok(moves)
    }

    fn push_piece_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let Some(occupant) = self.piece_at(from) else {
            return;
        };
        let color = occupant.color;
        match occupant.piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &DIAGONAL_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &ORTHOGONAL_DIRECTIONS, moves),
            Piece::Queen => self.generate_sliding_moves(from, color, &ALL_DIRECTIONS, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Record the move from `from` to `to` with the current occupants.
    fn create_move(&self, from: Square, to: Square) -> Option<Move> {
        let moving = self.piece_at(from)?;
        Some(Move::new(from, to, moving, self.piece_at(to)))
    }

    /// Shared rule for single-step pieces: empty or opposing destinations.
    fn can_land_on(&self, color: Color, to: Square) -> bool {
        let target = self.piece_at(to);
        target.is_none() || Board::is_capturable_by(color, target)
    }

    /// Knight and king: every on-board offset not blocked by a friendly piece.
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.can_land_on(color, to) {
                    moves.extend(self.create_move(from, to));
                }
            }
        }
    }
}
