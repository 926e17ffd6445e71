use super::{Color, ColoredPiece, Piece, Square, BOARD_SIZE};

/// Decoded piece placement, rank 1 first. `None` is an empty cell.
pub type Layout = [[Option<ColoredPiece>; BOARD_SIZE]; BOARD_SIZE];

/// Mailbox board: one marker per cell plus the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Layout,
    pub(crate) side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            board.cells[0][col] = Some(ColoredPiece::new(Color::White, *piece));
            board.cells[7][col] = Some(ColoredPiece::new(Color::Black, *piece));
            board.cells[1][col] = Some(ColoredPiece::new(Color::White, Piece::Pawn));
            board.cells[6][col] = Some(ColoredPiece::new(Color::Black, Piece::Pawn));
        }
        board
    }

    /// Board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            side_to_move: Color::White,
        }
    }

    /// Build a board from a decoded layout. Side to move is White.
    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        Board {
            cells: layout,
            side_to_move: Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<ColoredPiece>) {
        self.cells[sq.row()][sq.col()] = piece;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Hand the move to the other side.
    #[inline]
    pub fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// True when `marker` is a piece belonging to `side`.
    #[inline]
    #[must_use]
    pub fn is_owned_by(side: Color, marker: Option<ColoredPiece>) -> bool {
        matches!(marker, Some(p) if p.color == side)
    }

    /// True when `marker` is a piece `side` could capture. Empty cells are not.
    #[inline]
    #[must_use]
    pub fn is_capturable_by(side: Color, marker: Option<ColoredPiece>) -> bool {
        matches!(marker, Some(p) if p.color != side)
    }

    /// Board with every piece's color swapped, mirrored rank-wise, and the
    /// other side to move.
    #[must_use]
    pub fn color_flipped(&self) -> Self {
        let mut flipped = Board::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                flipped.cells[BOARD_SIZE - 1 - row][col] =
                    self.cells[row][col].map(ColoredPiece::flipped);
            }
        }
        flipped.side_to_move = self.side_to_move.opponent();
        flipped
    }
}
