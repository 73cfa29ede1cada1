//! Betting street orchestration.
//!
//! [`run_street`] asks each seat for an action in turn, applies the chips to
//! the table and decides when the street is closed:
//!
//! - without a raise, after one lap from the table's acting seat;
//! - after a raise or an all-in that lifts the high bet, once every other
//!   seat that can still act has answered it;
//! - immediately, when a single contestant is left holding cards.
//!
//! Awarding an uncontested pot is left to the caller via
//! [`Table::award_uncontested`].

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::errors::GameError;
use crate::history::{ActionRecord, Street};
use crate::player::PlayerAction;
use crate::table::Table;

/// What happened on one street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetSummary {
    pub street: Street,
    /// Resolved actions in the order they were applied
    pub actions: Vec<ActionRecord>,
    /// Highest total contribution on this street when it closed
    pub highest_bet: u32,
    /// Seats still holding cards
    pub remaining: Vec<usize>,
}

impl StreetSummary {
    /// The sole remaining seat, when everyone else folded.
    pub fn uncontested(&self) -> Option<usize> {
        match self.remaining.as_slice() {
            [seat] => Some(*seat),
            _ => None,
        }
    }
}

/// Plays the betting street of the table's current state.
///
/// # Errors
///
/// [`GameError::InvalidTransition`] when the table is not in a betting state
/// (`PreFlop`, `Flop`, `Turn` or `River`).
pub fn run_street(table: &mut Table) -> Result<StreetSummary, GameError> {
    let state = table.state();
    let street = state.street().ok_or(GameError::InvalidTransition {
        action: "run a betting street",
        state,
    })?;

    let n = table.contestants().len();
    let mut highest = table
        .contestants()
        .iter()
        .map(|c| c.street_bet())
        .max()
        .unwrap_or(0);
    let mut actions = Vec::new();

    let mut queue = actionable(table, seats_after(n, table.acting_seat(), true));

    // a lone seat with chips and nothing to answer has no one to bet against
    let nothing_to_do = queue.len() < 2
        && queue
            .iter()
            .all(|&s| table.contestants()[s].street_bet() >= highest);

    if table.active_seats().len() > 1 && !nothing_to_do {
        while let Some(seat) = queue.pop_front() {
            if table.active_seats().len() <= 1 {
                break;
            }
            if !can_act(table, seat) {
                continue;
            }

            let bet_before = table.contestants()[seat].street_bet();
            let to_call = highest - bet_before;
            let pot = table.pot();
            let requested = table.request_action(seat, to_call);
            let (action, amount) = apply(table, seat, to_call, requested);

            let bet_after = table.contestants()[seat].street_bet();
            if bet_after > highest {
                highest = bet_after;
                queue = actionable(table, seats_after(n, seat, false));
            }

            debug!(seat, ?requested, ?action, amount, to_call, pot, "action applied");
            actions.push(ActionRecord {
                seat,
                name: table.contestants()[seat].name().to_string(),
                street,
                action,
                amount,
            });
        }
    }

    Ok(StreetSummary {
        street,
        actions,
        highest_bet: highest,
        remaining: table.active_seats(),
    })
}

/// Applies one requested action and returns the action actually played with
/// the chips it put in.
fn apply(
    table: &mut Table,
    seat: usize,
    to_call: u32,
    requested: PlayerAction,
) -> (PlayerAction, u32) {
    let stack = table.contestants()[seat].stack();
    match requested {
        PlayerAction::Fold => {
            table.fold_contestant(seat);
            (PlayerAction::Fold, 0)
        }
        PlayerAction::Check if to_call == 0 => (PlayerAction::Check, 0),
        PlayerAction::Check => {
            warn!(seat, to_call, "check facing a bet is played as a fold");
            table.fold_contestant(seat);
            (PlayerAction::Fold, 0)
        }
        PlayerAction::Call if to_call == 0 => (PlayerAction::Check, 0),
        PlayerAction::Call => {
            let paid = table.commit_chips(seat, to_call);
            if paid == stack {
                (PlayerAction::AllIn, paid)
            } else {
                (PlayerAction::Call, paid)
            }
        }
        PlayerAction::Raise(increment) => {
            let increment = increment.max(table.config().min_raise);
            let wanted = to_call.saturating_add(increment);
            if wanted >= stack {
                if wanted > stack {
                    warn!(seat, wanted, stack, "raise capped at the remaining stack");
                }
                let paid = table.commit_chips(seat, stack);
                (PlayerAction::AllIn, paid)
            } else {
                let paid = table.commit_chips(seat, wanted);
                (PlayerAction::Raise(paid - to_call), paid)
            }
        }
        PlayerAction::AllIn => {
            let paid = table.commit_chips(seat, stack);
            (PlayerAction::AllIn, paid)
        }
    }
}

/// Seats in seating order starting at `from` (included or not), one lap.
fn seats_after(n: usize, from: usize, inclusive: bool) -> impl Iterator<Item = usize> {
    let skip = if inclusive { 0 } else { 1 };
    (skip..n).map(move |i| (from + i) % n)
}

fn actionable(table: &Table, seats: impl Iterator<Item = usize>) -> VecDeque<usize> {
    seats.filter(|&s| can_act(table, s)).collect()
}

/// Holding cards with chips behind; all-in seats sit out the betting.
fn can_act(table: &Table, seat: usize) -> bool {
    let c = &table.contestants()[seat];
    c.in_hand() && c.stack() > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_after_wraps_around() {
        assert_eq!(seats_after(4, 2, true).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
        assert_eq!(seats_after(4, 2, false).collect::<Vec<_>>(), vec![3, 0, 1]);
        assert_eq!(seats_after(0, 0, true).count(), 0);
    }
}
