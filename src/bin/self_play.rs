//! Plays the engine against itself over UCI.
//!
//! Two interpreter processes are started; each is sent the game so far with
//! `position startpos moves ...` before it is asked for a move, and the board
//! is dumped with `d` after every move.
//!
//! Usage: cargo run --bin self_play -- --max-moves 40 --depth 3

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Self-play driver for the UCI engine", long_about = None)]
struct Args {
    /// Engine executable; defaults to the simple_chess binary next to this one
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Stop after this many half-moves
    #[arg(long, default_value_t = 100)]
    max_moves: usize,

    /// Search depth sent with each `go`
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

/// One running engine with line-buffered pipes.
struct EngineProcess {
    name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl EngineProcess {
    fn spawn(path: &Path, name: &str) -> Result<Self> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to start engine {}", path.display()))?;
        let stdin = child.stdin.take().context("engine stdin unavailable")?;
        let stdout = child.stdout.take().context("engine stdout unavailable")?;
        Ok(EngineProcess {
            name: name.to_string(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }

    fn send(&mut self, command: &str) -> Result<()> {
        debug!("{} <- {command}", self.name);
        writeln!(self.stdin, "{command}")?;
        self.stdin.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            bail!("{} closed its output", self.name);
        }
        let line = line.trim_end().to_string();
        debug!("{} -> {line}", self.name);
        Ok(line)
    }

    /// Read lines up to and including the first one matching `done`.
    fn read_until(&mut self, done: impl Fn(&str) -> bool) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            let finished = done(&line);
            lines.push(line);
            if finished {
                return Ok(lines);
            }
        }
    }

    /// Request a `d` dump and return the grid lines, dropping the move list.
    fn read_board(&mut self) -> Result<Vec<String>> {
        self.send("d")?;
        let mut grid = self.read_until(|line| line == "Legal moves:")?;
        grid.pop();
        self.read_line()?;
        Ok(grid)
    }

    fn initialize(&mut self) -> Result<()> {
        self.send("uci")?;
        self.read_until(|line| line == "uciok")?;
        self.send("isready")?;
        self.read_until(|line| line == "readyok")?;
        self.send("position startpos")
    }

    fn shutdown(mut self) -> Result<()> {
        self.send("quit")?;
        let status = self.child.wait()?;
        debug!("{} exited with {status}", self.name);
        Ok(())
    }
}

fn default_engine_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate current executable")?;
    Ok(exe.with_file_name(format!("simple_chess{}", std::env::consts::EXE_SUFFIX)))
}

/// Move text from a `bestmove <move> [ponder <move>]` reply.
fn parse_bestmove(line: &str) -> Option<&str> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("bestmove"), Some(mv)) if mv != "0000" => Some(mv),
        _ => None,
    }
}

fn play_game(
    engines: &mut [EngineProcess; 2],
    max_moves: usize,
    depth: u32,
) -> Result<Vec<String>> {
    let mut history: Vec<String> = Vec::new();

    for move_count in 0..max_moves {
        let (current, next) = if move_count % 2 == 0 { (0, 1) } else { (1, 0) };

        engines[current].send(&format!("go depth {depth}"))?;
        let response = engines[current].read_until(|line| line.starts_with("bestmove"))?;
        let Some(best_move) = response.last().and_then(|line| parse_bestmove(line)) else {
            println!("No valid move found. Game over.");
            break;
        };
        history.push(best_move.to_string());
        println!("Move {}: {best_move}", move_count + 1);

        let position = format!("position startpos moves {}", history.join(" "));
        engines[next].send(&position)?;
        for line in engines[next].read_board()? {
            println!("{line}");
        }
    }

    Ok(history)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let engine_path = match args.engine {
        Some(path) => path,
        None => default_engine_path()?,
    };
    info!(
        "engine {} depth {} max moves {}",
        engine_path.display(),
        args.depth,
        args.max_moves
    );

    let mut engines = [
        EngineProcess::spawn(&engine_path, "white")?,
        EngineProcess::spawn(&engine_path, "black")?,
    ];
    for engine in engines.iter_mut() {
        engine.initialize()?;
    }

    let history = play_game(&mut engines, args.max_moves, args.depth)?;
    info!("game over after {} half-moves", history.len());

    let [white, black] = engines;
    white.shutdown()?;
    black.shutdown()?;
    Ok(())
}
