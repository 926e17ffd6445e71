use super::Board;

impl Board {
    /// Static material balance from White's point of view.
    ///
    /// Each piece contributes its [`Piece::value`](super::Piece::value), negated
    /// for Black. There is no positional or mobility term.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .map(|p| p.color.sign() * p.piece.value())
            .sum()
    }
}
