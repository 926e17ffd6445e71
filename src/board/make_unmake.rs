use std::ops::{Deref, DerefMut};

use super::{Board, Move};

impl Board {
    /// Place the move on the board.
    ///
    /// The destination receives the promotion piece if present, otherwise the
    /// moved piece; the source is cleared. Side to move is left untouched and
    /// the move is not validated.
    pub fn apply(&mut self, m: &Move) {
        self.set_piece(m.to, Some(m.placed_piece()));
        self.set_piece(m.from, None);
    }

    /// Exact inverse of [`Board::apply`] for the same move value.
    pub fn revert(&mut self, m: &Move) {
        self.set_piece(m.from, Some(m.piece_moved));
        self.set_piece(m.to, m.piece_captured);
    }

    /// Apply `m` and pass the turn, for as long as the returned guard lives.
    ///
    /// Dropping the guard reverts the move and restores the side to move, so
    /// every exit from the caller's scope (including early `break`s) leaves
    /// the board as it found it.
    pub fn scoped_apply(&mut self, m: Move) -> MoveGuard<'_> {
        self.apply(&m);
        self.toggle_side_to_move();
        MoveGuard { board: self, mv: m }
    }

    /// Play a move permanently: apply it and hand the turn over.
    pub fn make_move(&mut self, m: &Move) {
        self.apply(m);
        self.toggle_side_to_move();
    }
}

/// Borrow of a board with one move applied. See [`Board::scoped_apply`].
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl MoveGuard<'_> {
    #[must_use]
    pub fn applied_move(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.revert(&self.mv);
        self.board.toggle_side_to_move();
    }
}
