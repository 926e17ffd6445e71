//! Search algorithm tests.
//!
//! Tactical scenarios plus a brute-force minimax used as a reference for
//! alpha-beta results.

use super::{board, random_position};
use crate::board::{
    find_best_move, Board, Color, Move, SearchInfo, SearchLogger, Searcher, SCORE_INFINITY,
};

/// Plain minimax with the same tie-breaking as the engine: the first move
/// reaching the best score wins.
pub(super) fn minimax(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
) -> (i32, Option<Move>, u64) {
    if depth == 0 {
        return (board.evaluate(), None, 1);
    }
    let moves = board.generate_moves();
    if moves.is_empty() {
        return (board.evaluate(), None, 1);
    }

    let mut nodes = 1;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    let mut best_move = None;
    for mv in moves {
        let mut child = board.scoped_apply(mv);
        let (score, _, sub) = minimax(&mut child, depth - 1, !maximizing);
        nodes += sub;
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = Some(mv);
        }
    }
    (best_score, best_move, nodes)
}

#[derive(Default)]
struct CollectingLogger {
    lines: Vec<SearchInfo>,
}

impl SearchLogger for CollectingLogger {
    fn info(&mut self, info: &SearchInfo) {
        self.lines.push(info.clone());
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn forced_king_move_prefers_first_generated() {
    let mut b = board("8/8/8/8/7k/7p/7P/7K w - - 0 1");
    let moves: Vec<String> = b.generate_moves().iter().map(ToString::to_string).collect();
    assert_eq!(moves, vec!["h1g1", "h1g2"]);

    let best = find_best_move(&mut b, 1).unwrap();
    assert_eq!(best.to_string(), "h1g1");
}

#[test]
fn white_rook_takes_hanging_queen() {
    let mut b = board("q3k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    for depth in 1..=2 {
        let best = find_best_move(&mut b, depth).unwrap();
        assert_eq!(best.to_string(), "a1a8", "depth {depth}");
    }
}

#[test]
fn black_minimizes_by_taking_queen() {
    let mut b = board("4k2r/8/8/8/8/8/8/4K2Q b - - 0 1");
    let result = Searcher::new(&mut b).search(1);
    assert_eq!(result.best_move.unwrap().to_string(), "h8h1");
    assert_eq!(result.score, -5);
}

#[test]
fn start_position_depth_two_is_balanced() {
    let mut b = Board::new();
    let result = Searcher::new(&mut b).search(2);
    assert_eq!(result.score, 0);
    assert!(result.best_move.is_some());
}

#[test]
fn search_leaves_board_unchanged() {
    let mut b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1");
    let original = b.clone();
    let _ = find_best_move(&mut b, 3);
    assert_eq!(b, original);

    b.set_side_to_move(Color::Black);
    let original = b.clone();
    let _ = find_best_move(&mut b, 2);
    assert_eq!(b, original);
}

#[test]
fn no_pieces_means_no_move() {
    let mut b = Board::empty();
    let result = Searcher::new(&mut b).search(3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
    assert_eq!(result.nodes, 1);
}

#[test]
fn side_without_pieces_gets_static_eval() {
    // White has nothing to move; Black's extra rook shows in the score.
    let mut b = board("4k2r/8/8/8/8/8/8/8 w - - 0 1");
    let (score, mv) = Searcher::new(&mut b).alpha_beta(2, -SCORE_INFINITY, SCORE_INFINITY, true);
    assert_eq!(mv, None);
    assert_eq!(score, -1005);
}

#[test]
fn depth_zero_is_static_evaluation() {
    let mut b = board("q3k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let mut searcher = Searcher::new(&mut b);
    let result = searcher.search(0);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -4);
    assert_eq!(searcher.stats().nodes, 1);
}

#[test]
fn alpha_beta_matches_minimax() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "q3k3/8/8/8/8/8/8/R3K3 w - - 0 1",
        "4k2r/8/8/8/8/8/8/4K2Q b - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b - - 0 1",
    ];
    for fen in fens {
        for depth in 1..=3 {
            let mut b = board(fen);
            let maximizing = b.side_to_move() == Color::White;
            let (expected_score, expected_move, minimax_nodes) =
                minimax(&mut b, depth, maximizing);

            let result = Searcher::new(&mut b).search(depth);
            assert_eq!(result.score, expected_score, "{fen} depth {depth}");
            assert_eq!(result.best_move, expected_move, "{fen} depth {depth}");
            assert!(result.nodes <= minimax_nodes, "{fen} depth {depth}");
        }
    }
}

#[test]
fn pruning_happens_in_start_position() {
    let mut b = Board::new();
    let mut searcher = Searcher::new(&mut b);
    searcher.search(3);
    assert!(searcher.stats().cutoffs > 0);
}

#[test]
fn random_positions_match_minimax() {
    for seed in 0..8 {
        let mut b = random_position(seed, 12);
        let maximizing = b.side_to_move() == Color::White;
        let (expected, _, _) = minimax(&mut b, 2, maximizing);
        let result = Searcher::new(&mut b).search(2);
        assert_eq!(result.score, expected, "seed {seed}");
    }
}

#[test]
fn logger_receives_one_info_line() {
    let mut b = board("q3k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let mut logger = CollectingLogger::default();
    let result = Searcher::new(&mut b).search_with_logger(1, &mut logger);

    let lines = &logger.lines;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].depth, 1);
    assert_eq!(lines[0].score, result.score);
    assert_eq!(lines[0].nodes, result.nodes);
    assert_eq!(lines[0].pv.map(|m| m.to_string()).as_deref(), Some("a1a8"));
}
