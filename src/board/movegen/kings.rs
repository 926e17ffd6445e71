use super::super::{Board, Color, Move, Square};
use super::ALL_DIRECTIONS;

impl Board {
    /// One step in any direction. Castling is never generated.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, color, &ALL_DIRECTIONS, moves);
    }
}
