use std::io::Write;

use anyhow::Context;
use clap::Parser;

use simple_chess::uci::run_uci_loop;

#[derive(Parser, Debug)]
#[command(author, version, about = "Material-only UCI chess engine", long_about = None)]
struct Args {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    // stdout carries protocol replies only; logs stay on stderr.
    run_uci_loop().context("UCI loop failed")
}
