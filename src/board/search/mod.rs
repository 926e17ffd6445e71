//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search explores a single board in place: each move is applied through
//! [`Board::scoped_apply`] and reverted when the guard drops, so no board
//! copies are made per ply. Scores are material balances from White's point
//! of view; White maximizes and Black minimizes.

mod report;

use std::time::Instant;

use log::{debug, trace};

use super::{Board, Color, Move};
pub use report::{SearchInfo, SearchLogger};

/// Bound used for the root window; larger than any reachable evaluation.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Result of a search containing the best move and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the side to move has no moves
    pub best_move: Option<Move>,
    /// Score of the best line, White-positive
    pub score: i32,
    /// Nodes visited, including the root
    pub nodes: u64,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Search context borrowing the board exclusively for its lifetime.
pub struct Searcher<'a> {
    board: &'a mut Board,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Searcher {
            board,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// One alpha-beta node.
    ///
    /// `maximizing` selects the role of the side to move at this node. At
    /// depth 0, or when no move exists, the static evaluation is returned
    /// with no move.
    pub fn alpha_beta(
        &mut self,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        alpha_beta(self.board, &mut self.stats, depth, alpha, beta, maximizing)
    }

    /// Full-window search from the root.
    ///
    /// White to move maximizes, Black to move minimizes.
    pub fn search(&mut self, depth: u32) -> SearchResult {
        self.stats = SearchStats::default();
        let maximizing = self.board.side_to_move() == Color::White;
        let (score, best_move) =
            self.alpha_beta(depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing);
        debug!(
            "search depth {} score {} nodes {} cutoffs {} best {}",
            depth,
            score,
            self.stats.nodes,
            self.stats.cutoffs,
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string())
        );
        SearchResult {
            best_move,
            score,
            nodes: self.stats.nodes,
        }
    }

    /// Best move at `depth`, or `None` when no move is available.
    pub fn best_move(&mut self, depth: u32) -> Option<Move> {
        self.search(depth).best_move
    }

    /// Search and report the result through `logger`.
    pub fn search_with_logger(
        &mut self,
        depth: u32,
        logger: &mut dyn SearchLogger,
    ) -> SearchResult {
        let start = Instant::now();
        let result = self.search(depth);
        logger.info(&SearchInfo::from_result(
            depth,
            &result,
            start.elapsed().as_millis(),
        ));
        result
    }
}

fn alpha_beta(
    board: &mut Board,
    stats: &mut SearchStats,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> (i32, Option<Move>) {
    stats.nodes += 1;
    if depth == 0 {
        return (board.evaluate(), None);
    }

    let moves = board.generate_moves();
    if moves.is_empty() {
        return (board.evaluate(), None);
    }

    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    let mut best_move = None;

    for mv in moves {
        let score = {
            let mut child = board.scoped_apply(mv);
            alpha_beta(&mut child, stats, depth - 1, alpha, beta, !maximizing).0
        };

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            trace!("cutoff at depth {depth} after {mv} ({alpha}, {beta})");
            break;
        }
    }

    (best_score, best_move)
}

/// Convenience wrapper: best move for the side to move at `depth`.
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<Move> {
    Searcher::new(board).best_move(depth)
}
