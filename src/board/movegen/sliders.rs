use super::super::{Board, Color, Move, Square};

impl Board {
    /// Rook, bishop and queen rays.
    ///
    /// Each ray yields its empty squares in order and stops at the first
    /// occupied one, which is included only when it holds an opposing piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                let target = self.piece_at(to);
                if target.is_none() {
                    moves.extend(self.create_move(from, to));
                } else {
                    if Board::is_capturable_by(color, target) {
                        moves.extend(self.create_move(from, to));
                    }
                    break;
                }
                current = to;
            }
        }
    }
}
