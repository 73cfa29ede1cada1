//! `sim`: AI vs AI rounds, one JSONL `RoundRecord` per round when `--output`
//! is given.

use std::io::Write;

use holdem_ai::create_ai;
use holdem_engine::history::RoundLogger;
use holdem_engine::player::Contestant;
use holdem_engine::table::Table;
use tracing::info;

use crate::error::CliError;
use crate::session::{busted, play_round, today, write_stacks};

use super::load_config;

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    output: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = load_config()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut table = Table::new(cfg.table(), seed)?;
    for (i, name) in ["ai-1", "ai-2"].into_iter().enumerate() {
        let ai = create_ai(&cfg.ai, seed.wrapping_add(i as u64 + 1))
            .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
        table.add_contestant(Contestant::new(name, cfg.starting_stack, ai))?;
    }

    let mut logger = match output {
        Some(path) => RoundLogger::create(path)?,
        None => RoundLogger::detached(&today()),
    };

    writeln!(out, "sim: rounds={} seed={} ai={}", rounds, seed, cfg.ai)?;
    let mut played = 0u32;
    for _ in 0..rounds {
        if let Some(name) = busted(&table) {
            writeln!(out, "{} is out of chips", name)?;
            break;
        }
        let outcome = play_round(&mut table, logger.next_id(), seed, &mut std::io::sink())?;
        logger.write(&outcome.record)?;
        played += 1;
    }

    info!(played, rounds, "simulation finished");
    writeln!(out, "Rounds played: {}", played)?;
    write_stacks(&table, out)?;
    if let Some(path) = output {
        writeln!(out, "Output: {}", path)?;
    }
    Ok(())
}
