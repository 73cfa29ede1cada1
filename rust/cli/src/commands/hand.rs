//! `hand`: evaluates typed cards, e.g. `--hole "Ah Kh" --board "Qh Jh Th 9c 8d"`.

use std::collections::HashSet;
use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

const MAX_HOLE: usize = 2;
const MAX_BOARD: usize = 5;

pub fn handle_hand_command(hole: &str, board: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hole = parse_cards(hole)?;
    let board = parse_cards(board)?;

    if hole.is_empty() || hole.len() > MAX_HOLE {
        return Err(CliError::InvalidInput(format!(
            "expected 1 or {} private cards, got {}",
            MAX_HOLE,
            hole.len()
        )));
    }
    if board.len() > MAX_BOARD {
        return Err(CliError::InvalidInput(format!(
            "a board has at most {} cards, got {}",
            MAX_BOARD,
            board.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = hole.iter().chain(&board).find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("card {} appears twice", dup)));
    }

    let score = evaluate(&hole, &board);
    writeln!(out, "Hole: {}", format_cards(&hole))?;
    writeln!(out, "Board: {}", format_board(&board))?;
    writeln!(out, "Hand: {}", score.category())?;
    writeln!(out, "Score: {}", score.value())?;
    Ok(())
}
