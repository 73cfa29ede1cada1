//! # Play Command
//!
//! Heads-up rounds against the configured AI, or two AIs playing each other.
//!
//! - **Human vs AI**: you act at a prompt (`check`, `call`, `raise 40`,
//!   `fold`, `allin`); `q` or end of input folds and ends the session.
//! - **AI vs AI**: both seats use the configured AI and the rounds are
//!   narrated.
//!
//! The session stops early when a contestant runs out of chips.

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use holdem_ai::create_ai;
use holdem_engine::history::RoundLogger;
use holdem_engine::player::{Contestant, Player};
use holdem_engine::table::Table;
use tracing::info;

use crate::cli::Vs;
use crate::error::CliError;
use crate::human::ConsolePlayer;
use crate::session::{busted, play_round, today, write_stacks};

use super::load_config;

/// Play `rounds` (default 1) heads-up rounds.
///
/// `input` and `prompt` are only used against a human: actions are read from
/// `input` and the hand/prompt lines go to `prompt`. Narration goes to `out`.
pub fn handle_play_command(
    vs: Vs,
    rounds: Option<u32>,
    seed: Option<u64>,
    input: Box<dyn BufRead>,
    prompt: Box<dyn Write>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let rounds = rounds.unwrap_or(1);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: vs={} rounds={} seed={} ai={}",
        vs.as_str(),
        rounds,
        seed,
        cfg.ai
    )?;

    let ai = |offset: u64| -> Result<Box<dyn Player>, CliError> {
        create_ai(&cfg.ai, seed.wrapping_add(offset))
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))
    };

    let mut table = Table::new(cfg.table(), seed)?;
    let quit = match vs {
        Vs::Human => {
            // the second seat posts the small blind and acts first in round 1
            let (human, quit) = ConsolePlayer::new(input, prompt);
            table.add_contestant(Contestant::new("ai", cfg.starting_stack, ai(1)?))?;
            table.add_contestant(Contestant::new("you", cfg.starting_stack, Box::new(human)))?;
            quit
        }
        Vs::Ai => {
            table.add_contestant(Contestant::new("ai-1", cfg.starting_stack, ai(1)?))?;
            table.add_contestant(Contestant::new("ai-2", cfg.starting_stack, ai(2)?))?;
            Rc::new(Cell::new(false))
        }
    };

    let mut logger = RoundLogger::detached(&today());
    let mut played = 0u32;
    for i in 1..=rounds {
        if let Some(name) = busted(&table) {
            writeln!(out, "{} is out of chips", name)?;
            break;
        }
        writeln!(out, "Round {}", i)?;
        play_round(&mut table, logger.next_id(), seed, out)?;
        write_stacks(&table, out)?;
        played += 1;
        if quit.get() {
            writeln!(out, "Quit requested.")?;
            break;
        }
    }

    info!(played, rounds, "play session finished");
    writeln!(out, "Rounds played: {} of {}", played, rounds)?;
    Ok(())
}
