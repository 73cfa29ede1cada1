//! # holdem CLI Library
//!
//! Command-line driver for the `holdem_engine` table and the `holdem_ai`
//! opponents.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, executes the subcommand and returns the process
//! exit code. Output and errors go to the writers it is given, so tests can
//! capture them.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Hole P1:"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against an AI, or watch two AIs
//! - `sim`: Simulate AI vs AI rounds and write a JSONL history
//! - `deal`: Deal one seeded round and show both hands
//! - `hand`: Evaluate typed cards
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Cursor, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_hand_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

/// When set, `play --vs human` reads its actions from this value instead of
/// stdin (`\n` separated).
pub const TEST_INPUT_ENV: &str = "HOLDEM_TEST_INPUT";

const COMMANDS: &[&str] = &["play", "sim", "deal", "hand", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the exit code: `0` on success, `2` on usage or command errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = match HoldemCli::try_parse_from(&argv) {
        Ok(parsed) => parsed,
        Err(e) => return report_usage(e, out, err),
    };

    let result = match parsed.cmd {
        Commands::Play { vs, rounds, seed } => {
            let input: Box<dyn BufRead> = match std::env::var(TEST_INPUT_ENV) {
                Ok(scripted) => Box::new(Cursor::new(scripted.into_bytes())),
                Err(_) => Box::new(std::io::stdin().lock()),
            };
            handle_play_command(vs, rounds, seed, input, Box::new(std::io::stdout()), out)
        }
        Commands::Sim {
            rounds,
            seed,
            output,
        } => handle_sim_command(rounds, seed, output.as_deref(), out),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Hand { hole, board } => handle_hand_command(&hole, &board, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => 0,
            Err(_) => 2,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: holdem <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: holdem --help");
    2
}
