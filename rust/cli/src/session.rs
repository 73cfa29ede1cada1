//! Drives full rounds on a [`Table`] and turns them into history records.

use std::io::Write;

use holdem_engine::betting::run_street;
use holdem_engine::cards::Card;
use holdem_engine::history::{RoundRecord, ShowdownInfo};
use holdem_engine::table::{RoundState, ShowdownResult, Table};
use tracing::debug;

use crate::error::CliError;
use crate::formatters::{format_action, format_board};

/// Everything a command may want to show about a finished round.
#[derive(Debug)]
pub struct RoundOutcome {
    pub record: RoundRecord,
    /// Private cards as dealt, by seat
    pub holes: Vec<Vec<Card>>,
    /// `None` when the pot went uncontested
    pub showdown: Option<ShowdownResult>,
}

/// Plays one round from the blinds to the pot award and closes it, narrating
/// to `out`. The table must be waiting for players.
pub fn play_round(
    table: &mut Table,
    round_id: String,
    seed: u64,
    out: &mut dyn Write,
) -> Result<RoundOutcome, CliError> {
    table.start_new_round()?;
    let holes: Vec<Vec<Card>> = table
        .contestants()
        .iter()
        .map(|c| c.hand().to_vec())
        .collect();

    let name = |t: &Table, seat: usize| t.contestants()[seat].name().to_string();
    writeln!(
        out,
        "Dealer: {}  Blinds: {} {} / {} {}",
        table.dealer_seat().map(|d| name(table, d)).unwrap_or_default(),
        name(table, table.small_blind_seat()),
        table.config().small_blind,
        name(table, table.big_blind_seat()),
        table.config().big_blind,
    )?;

    let mut actions = Vec::new();
    let mut uncontested = None;
    while table.state() != RoundState::Showdown {
        let summary = run_street(table)?;
        for a in &summary.actions {
            writeln!(out, "  {}", format_action(a))?;
        }
        actions.extend(summary.actions.iter().cloned());
        if summary.uncontested().is_some() {
            uncontested = Some(table.pot());
            break;
        }
        let revealed = table.deal_community_cards()?;
        if !revealed.is_empty() {
            writeln!(
                out,
                "{:?} {}  Pot: {}",
                table.state(),
                format_board(table.community_cards()),
                table.pot()
            )?;
        }
    }

    let board = table.community_cards().to_vec();
    let (winner, pot, showdown) = match uncontested {
        Some(pot) => {
            let seat = table.award_uncontested()?;
            writeln!(out, "{} wins {} uncontested", name(table, seat), pot)?;
            (Some(seat), pot, None)
        }
        None => {
            let result = table.evaluate_winner()?;
            for &(seat, score) in &result.hands {
                writeln!(
                    out,
                    "  {}: {} {}",
                    name(table, seat),
                    format_board(&holes[seat]),
                    score
                )?;
            }
            if let Some(seat) = result.winner {
                let tie = if result.tied { " (tie, first seat takes the pot)" } else { "" };
                writeln!(out, "{} wins {}{}", name(table, seat), result.pot, tie)?;
            }
            (result.winner, result.pot, Some(result))
        }
    };

    let record = RoundRecord {
        round_id,
        seed: Some(seed),
        actions,
        board,
        winner: winner.map(|seat| name(table, seat)),
        pot,
        ts: None,
        showdown: showdown.as_ref().map(|r| ShowdownInfo {
            hands: r
                .hands
                .iter()
                .map(|&(seat, score)| (seat, score.category().name().to_string(), score.value()))
                .collect(),
            tied: r.tied,
        }),
    };
    table.finish_round()?;
    debug!(round_id = %record.round_id, pot, "round closed");

    Ok(RoundOutcome {
        record,
        holes,
        showdown,
    })
}

/// Date part of round ids, `YYYYMMDD` in UTC.
pub fn today() -> String {
    chrono::Utc::now().format("%Y%m%d").to_string()
}

/// First seated contestant with no chips left.
pub fn busted(table: &Table) -> Option<&str> {
    table
        .contestants()
        .iter()
        .find(|c| c.stack() == 0)
        .map(|c| c.name())
}

pub fn write_stacks(table: &Table, out: &mut dyn Write) -> std::io::Result<()> {
    let stacks: Vec<String> = table
        .contestants()
        .iter()
        .map(|c| format!("{}={}", c.name(), c.stack()))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))
}
