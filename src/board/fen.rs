use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, ColoredPiece, Layout, Move, Piece, Square, BOARD_SIZE};

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Decode a FEN placement field into a layout with rank 1 stored first.
///
/// FEN lists rank 8 first, so ranks are reversed while decoding.
pub fn decode_layout(placement: &str) -> Result<Layout, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut layout: Layout = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (row, rank_str) in ranks.iter().rev().enumerate() {
        let mut cells: Vec<Option<ColoredPiece>> = Vec::with_capacity(BOARD_SIZE);
        for c in rank_str.chars() {
            if let Some(n) = c.to_digit(10) {
                cells.extend(std::iter::repeat(None).take(n as usize));
            } else {
                let piece =
                    ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                cells.push(Some(piece));
            }
        }
        if cells.len() != BOARD_SIZE {
            return Err(FenError::BadRankLength {
                rank: row + 1,
                files: cells.len(),
            });
        }
        layout[row].copy_from_slice(&cells);
    }
    Ok(layout)
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only the placement is required. A side-to-move field, when present,
    /// must be `w` or `b`; castling, en passant and clock fields are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let mut board = Board::from_layout(decode_layout(placement)?);

        match parts.next() {
            None | Some("w") => {}
            Some("b") => board.side_to_move = Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }
        Ok(board)
    }

    /// Encode the placement field (rank 8 first).
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in self.cells.iter().rev() {
            let mut text = String::new();
            let mut empty = 0;
            for cell in row {
                if let Some(piece) = cell {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// The from/to pair must match a generated move for the side to move. A
    /// trailing promotion letter is only accepted on a pawn move onto the
    /// last rank and is attached in the mover's color.
    ///
    /// # Example
    /// ```
    /// use simple_chess::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: uci.chars().count(),
            });
        }

        let invalid_square = |_| MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from_sq = Square::from_str(&uci[0..2]).map_err(invalid_square)?;
        let to_sq = Square::from_str(&uci[2..4]).map_err(invalid_square)?;

        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight))
                    if c.is_ascii_lowercase() =>
                {
                    Some((c, piece))
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let found = self
            .generate_moves()
            .into_iter()
            .find(|m| m.from == from_sq && m.to == to_sq)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })?;

        let Some((c, piece)) = promotion else {
            return Ok(found);
        };
        let mover = found.piece_moved;
        let last_row = match mover.color {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        };
        if mover.piece != Piece::Pawn || to_sq.row() != last_row {
            return Err(MoveParseError::InvalidPromotion { char: c });
        }
        Ok(found.with_promotion(ColoredPiece::new(mover.color, piece)))
    }
}
