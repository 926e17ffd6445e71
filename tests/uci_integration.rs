use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use simple_chess::board::Board;
use simple_chess::uci::{parse_position_command, parse_uci_move};

fn run_engine(input: &[u8]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_simple_chess");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn is_move_text(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 4
        && (b'a'..=b'h').contains(&bytes[0])
        && (b'1'..=b'8').contains(&bytes[1])
        && (b'a'..=b'h').contains(&bytes[2])
        && (b'1'..=b'8').contains(&bytes[3])
}

#[test]
fn uci_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_simple_chess");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"uci\nisready\nposition startpos moves e2e4\ngo depth 2\n")
        .unwrap();

    let mut output = String::new();
    let mut bestmove_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            bestmove_line = Some(line);
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let _ = child.wait();

    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("info depth 2"));

    let bestmove = bestmove_line.expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {}", bestmove);
    let mv = parts[1];
    assert_ne!(mv, "0000", "engine returned null move");

    let mut board = Board::new();
    let parts = ["position", "startpos", "moves", "e2e4"];
    parse_position_command(&mut board, &parts);

    let legal = parse_uci_move(&board, mv).is_some();
    assert!(legal, "bestmove not legal in position: {}", mv);
}

#[test]
fn uci_transcript_matches_protocol() {
    let lines = run_engine(
        b"uci\nisready\nposition fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\ngo depth 1\nd\nquit\n",
    );

    assert_eq!(lines[0], "id name SimpleChessEngine");
    assert_eq!(lines[1], "id author SCRB");
    assert!(lines.iter().any(|l| l.starts_with("option name Depth")));
    assert!(lines.iter().any(|l| l.starts_with("option name MaxDepth")));

    let uciok = lines.iter().position(|l| l == "uciok").expect("no uciok");
    assert_eq!(lines[uciok + 1], "readyok");
    assert!(lines[uciok + 2].starts_with("info depth 1 "));

    let bestmove = &lines[uciok + 3];
    let mv = bestmove.strip_prefix("bestmove ").expect("no bestmove");
    assert!(is_move_text(mv), "unexpected bestmove line {bestmove}");

    assert_eq!(lines[uciok + 4], "r n b q k b n r");
    let marker = lines.iter().position(|l| l == "Legal moves:").expect("no move list");
    assert_eq!(lines[marker + 1].split_whitespace().count(), 20);
}

#[test]
fn uci_setoption_caps_depth() {
    let lines = run_engine(b"setoption name MaxDepth value 1\nposition startpos\ngo depth 6\nquit\n");
    assert!(lines[0].starts_with("info depth 1 "), "got {:?}", lines);
    assert!(lines[1].starts_with("bestmove "));
}

#[test]
fn uci_reports_null_move_without_pieces() {
    let lines = run_engine(b"position fen 8/8/8/8/8/8/8/8 b - - 0 1\ngo depth 2\n");
    assert_eq!(lines.last().map(String::as_str), Some("bestmove 0000"));
}

#[test]
fn uci_bad_input_keeps_engine_alive() {
    let lines = run_engine(
        b"position fen not/a/fen\nposition startpos moves e2e5\nfoo\ngo depth 1\nisready\n",
    );
    assert!(lines.iter().any(|l| l.starts_with("bestmove ")));
    assert_eq!(lines.last().map(String::as_str), Some("readyok"));
}

#[test]
fn self_play_runs_a_short_game() {
    let output = Command::new(env!("CARGO_BIN_EXE_self_play"))
        .args(["--engine", env!("CARGO_BIN_EXE_simple_chess")])
        .args(["--max-moves", "4", "--depth", "1"])
        .output()
        .expect("failed to run self_play");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for n in 1..=4 {
        assert!(stdout.contains(&format!("Move {n}: ")), "missing move {n}:\n{stdout}");
    }
    assert!(!stdout.contains("Legal moves:"));
}
