use super::super::{Board, Color, Move, Square};

impl Board {
    /// Pushes and diagonal captures.
    ///
    /// No en passant, and no promotion piece is attached when a pawn reaches
    /// the last rank. A pawn whose forward row is off the board has no moves.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        let Some(forward_sq) = from.offset(dir, 0) else {
            return;
        };
        if self.is_empty(forward_sq) {
            moves.extend(self.create_move(from, forward_sq));
            if from.row() == color.pawn_start_row() {
                if let Some(double_sq) = from.offset(2 * dir, 0) {
                    if self.is_empty(double_sq) {
                        moves.extend(self.create_move(from, double_sq));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target_sq) = from.offset(dir, dc) {
                if Board::is_capturable_by(color, self.piece_at(target_sq)) {
                    moves.extend(self.create_move(from, target_sq));
                }
            }
        }
    }
}
