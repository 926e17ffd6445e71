//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation scenarios
//! - `make_unmake.rs` - Apply/revert and scoped-apply correctness
//! - `search.rs` - Alpha-beta scenarios and equivalence with plain minimax
//! - `edge_cases.rs` - Boundary positions and unusual boards
//! - `proptest.rs` - Property-based tests

mod search;

use rand::prelude::*;

use crate::board::{Board, Move, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).expect("valid fen")
}

pub(super) fn move_names(moves: &[Move]) -> Vec<String> {
    moves.iter().map(ToString::to_string).collect()
}

/// Play up to `plies` random pseudo-legal moves from the start position.
pub(super) fn random_position(seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(&mv);
    }
    board
}
