use std::fmt;

use super::SearchResult;
use crate::board::Move;

/// Summary of a finished search, in the shape of a UCI `info` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub time_ms: u128,
    pub pv: Option<Move>,
}

impl SearchInfo {
    #[must_use]
    pub fn from_result(depth: u32, result: &SearchResult, time_ms: u128) -> Self {
        SearchInfo {
            depth,
            score: result.score,
            nodes: result.nodes,
            time_ms,
            pv: result.best_move,
        }
    }
}

impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "info depth {} score cp {} nodes {} time {}",
            self.depth,
            self.score * 100,
            self.nodes,
            self.time_ms
        )?;
        if let Some(mv) = self.pv {
            write!(f, " pv {mv}")?;
        }
        Ok(())
    }
}

/// Receives a summary once a search finishes.
pub trait SearchLogger {
    fn info(&mut self, info: &SearchInfo);
}
