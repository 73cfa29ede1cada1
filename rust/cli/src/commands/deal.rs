//! `deal`: plays one seeded heads-up round between two checking players and
//! shows both private hands, the board and how each hand scored.

use std::io::Write;

use holdem_ai::passive::PassiveAI;
use holdem_engine::config::{STARTING_STACK, TableConfig};
use holdem_engine::history::RoundLogger;
use holdem_engine::player::Contestant;
use holdem_engine::table::Table;

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};
use crate::session::{play_round, today};

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut table = Table::new(TableConfig::default(), seed)?;
    for name in ["P1", "P2"] {
        table.add_contestant(Contestant::new(name, STARTING_STACK, Box::new(PassiveAI)))?;
    }

    let round_id = RoundLogger::detached(&today()).next_id();
    let outcome = play_round(&mut table, round_id, seed, &mut std::io::sink())?;

    writeln!(out, "Seed: {}", seed)?;
    for (seat, hole) in outcome.holes.iter().enumerate() {
        writeln!(out, "Hole P{}: {}", seat + 1, format_cards(hole))?;
    }
    writeln!(out, "Board: {}", format_board(&outcome.record.board))?;
    if let Some(result) = &outcome.showdown {
        for &(seat, score) in &result.hands {
            writeln!(out, "P{}: {}", seat + 1, score)?;
        }
        match (result.winner, result.tied) {
            (Some(_), true) => writeln!(out, "Result: tie")?,
            (Some(seat), false) => writeln!(out, "Result: P{} wins", seat + 1)?,
            (None, _) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed_is_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(42), &mut a).unwrap();
        handle_deal_command(Some(42), &mut b).unwrap();
        assert_eq!(a, b);

        let output = String::from_utf8(a).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Hole P1:"));
        assert!(output.contains("Hole P2:"));
        assert!(output.contains("Board: ["));
        assert!(output.contains("Result:"));
    }
}
