use super::super::{Board, Color, Move, Square};
use super::KNIGHT_OFFSETS;

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS, moves);
    }
}
