use std::io::{self, Write};

use crate::board::{Board, Move, SearchInfo, SearchLogger};

use super::format_uci_move;

pub fn print_ready<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "readyok")
}

pub fn print_info<W: Write>(out: &mut W, info: &SearchInfo) -> io::Result<()> {
    writeln!(out, "{info}")
}

/// Search logger that prints the `info` line to the interpreter output.
///
/// The first write error is kept and surfaced by [`InfoWriter::finish`].
pub struct InfoWriter<'w, W: Write> {
    out: &'w mut W,
    status: io::Result<()>,
}

impl<'w, W: Write> InfoWriter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        InfoWriter { out, status: Ok(()) }
    }

    pub fn finish(self) -> io::Result<()> {
        self.status
    }
}

impl<W: Write> SearchLogger for InfoWriter<'_, W> {
    fn info(&mut self, info: &SearchInfo) {
        if self.status.is_ok() {
            self.status = print_info(&mut *self.out, info);
        }
    }
}

/// `bestmove <move>`, or the null move `0000` when nothing was found.
pub fn print_bestmove<W: Write>(out: &mut W, best_move: Option<Move>) -> io::Result<()> {
    match best_move {
        Some(best_move) => writeln!(out, "bestmove {}", format_uci_move(&best_move)),
        None => writeln!(out, "bestmove 0000"),
    }
}

/// Board grid followed by `Legal moves:` and the moves on one line.
pub fn print_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "{}", board.display())?;
    let moves: Vec<String> = board.generate_moves().iter().map(format_uci_move).collect();
    writeln!(out, "Legal moves:")?;
    writeln!(out, "{}", moves.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn info_writer_prints_info_line() {
        let info = SearchInfo {
            depth: 3,
            score: 5,
            nodes: 77,
            time_ms: 1,
            pv: None,
        };
        let text = render(|o| {
            let mut writer = InfoWriter::new(o);
            writer.info(&info);
            writer.finish()
        });
        assert_eq!(text, "info depth 3 score cp 500 nodes 77 time 1\n");
    }

    #[test]
    fn bestmove_null_move() {
        assert_eq!(render(|o| print_bestmove(o, None)), "bestmove 0000\n");
    }

    #[test]
    fn bestmove_formats_move() {
        let mv = Board::new().parse_move("b1c3").unwrap();
        assert_eq!(render(|o| print_bestmove(o, Some(mv))), "bestmove b1c3\n");
    }

    #[test]
    fn board_dump_ends_with_move_list() {
        let text = render(|o| print_board(o, &Board::new()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "r n b q k b n r");
        let marker = lines.iter().position(|l| *l == "Legal moves:").unwrap();
        assert_eq!(lines[marker + 1].split_whitespace().count(), 20);
        assert_eq!(marker + 2, lines.len());
    }
}
