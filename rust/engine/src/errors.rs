use thiserror::Error;

use crate::table::RoundState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("At least 2 contestants are required, found {found}")]
    NotEnoughPlayers { found: usize },
    #[error("Cannot {action} while the round is in state {state:?}")]
    InvalidTransition {
        action: &'static str,
        state: RoundState,
    },
    #[error("Contestant '{0}' is already seated")]
    DuplicateContestant(String),
    #[error("No contestant named '{0}'")]
    UnknownContestant(String),
    #[error("Contestant '{0}' has no chips left")]
    BustedContestant(String),
    #[error("Invalid chip amount: {0}")]
    InvalidChipAmount(u32),
    #[error("Insufficient chips: requested {requested}, available {available}")]
    InsufficientChips { requested: u32, available: u32 },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}
