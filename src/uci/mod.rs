//! Universal Chess Interface (UCI) protocol implementation.
//!
//! A line-oriented interpreter: commands are read from any [`BufRead`],
//! replies are written to any [`Write`]. Only the subset of UCI the engine
//! needs is understood (`uci`, `isready`, `ucinewgame`, `position`, `go`,
//! `setoption`, `quit`) plus the `d` board dump.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::board::{Board, FenError, Move, MoveParseError, Searcher};

pub mod command;
pub mod options;
pub mod report;

use command::{parse_uci_command, UciCommand};
use options::{parse_setoption, UciOptions};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UciError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),
    #[error("invalid move '{move_str}': {error}")]
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    #[error("missing required parts in position command")]
    MissingParts,
}

/// Parse a move in UCI format (e.g., "e2e4", "e7e8q").
///
/// Delegates to `Board::parse_move`. Returns `None` if the move is invalid.
#[must_use]
pub fn parse_uci_move(board: &Board, uci_string: &str) -> Option<Move> {
    board.parse_move(uci_string).ok()
}

#[must_use]
pub fn format_uci_move(mv: &Move) -> String {
    mv.to_string()
}

/// Parse a UCI position command, returning an error on failure.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". The FEN runs up to the
/// `moves` keyword, so abbreviated FENs are accepted. A bad FEN leaves the
/// board untouched; a bad move stops the list with the earlier moves played.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let moves_at = parts
        .iter()
        .position(|p| *p == "moves")
        .unwrap_or(parts.len());

    match parts.get(1).copied() {
        Some("startpos") => *board = Board::new(),
        Some("fen") => {
            let fen = parts.get(2..moves_at).unwrap_or_default().join(" ");
            if fen.is_empty() {
                return Err(UciError::MissingParts);
            }
            *board = Board::try_from_fen(&fen)?;
        }
        _ => return Err(UciError::MissingParts),
    }

    for move_str in parts.iter().skip(moves_at + 1) {
        let mv = board
            .parse_move(move_str)
            .map_err(|error| UciError::InvalidMove {
                move_str: (*move_str).to_string(),
                error,
            })?;
        board.make_move(&mv);
    }

    Ok(())
}

/// Parse a UCI position command, logging errors on failure.
///
/// This is a convenience wrapper around `try_parse_position_command` for
/// use in the main UCI loop where errors should be logged but not propagated.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        warn!("{e}");
    }
}

/// Depth requested by `go depth N`, if any.
fn parse_go_depth(parts: &[&str]) -> Option<u32> {
    let at = parts.iter().position(|p| *p == "depth")?;
    match parts.get(at + 1).map(|v| v.parse::<u32>()) {
        Some(Ok(depth)) => Some(depth),
        _ => {
            warn!("ignoring malformed go depth in {:?}", parts.join(" "));
            None
        }
    }
}

/// Interpreter state: the current position and option values.
#[derive(Debug, Clone, Default)]
pub struct UciEngine {
    board: Board,
    options: UciOptions,
}

impl UciEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &UciOptions {
        &self.options
    }

    /// Execute one command. Returns `false` once the interpreter should stop.
    pub fn handle_command<W: Write>(&mut self, cmd: UciCommand, out: &mut W) -> io::Result<bool> {
        match cmd {
            UciCommand::Uci => self.options.print(out)?,
            UciCommand::IsReady => report::print_ready(out)?,
            UciCommand::UciNewGame => self.board = Board::new(),
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut self.board, &parts);
                debug!("position set: {}", self.board.to_fen_placement());
            }
            UciCommand::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.go(&parts, out)?;
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match parse_setoption(&parts) {
                    Some((name, value)) => self.options.apply_setoption(&name, value.as_deref()),
                    None => warn!("malformed setoption: {}", parts.join(" ")),
                }
            }
            UciCommand::Display => report::print_board(out, &self.board)?,
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(line) => debug!("unknown command: {line}"),
        }
        out.flush()?;
        Ok(true)
    }

    /// Parse and execute one input line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        match parse_uci_command(line) {
            Some(cmd) => self.handle_command(cmd, out),
            None => Ok(true),
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?, out)? {
                break;
            }
        }
        Ok(())
    }

    fn go<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let depth = parse_go_depth(parts)
            .map_or(self.options.depth, |requested| self.options.clamp_depth(requested));
        debug!("go depth {depth} for {:?}", self.board.side_to_move());

        let mut info_writer = report::InfoWriter::new(out);
        let result = Searcher::new(&mut self.board).search_with_logger(depth, &mut info_writer);
        info_writer.finish()?;
        report::print_bestmove(out, result.best_move)
    }
}

/// Run the interpreter on the process's stdin and stdout.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    UciEngine::new().run(stdin.lock(), &mut stdout)
}
