//! Card, board, and action formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to support them,
//! and as h d c s otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::history::ActionRecord;
use holdem_engine::player::PlayerAction;

/// Windows consoles only get symbols inside modern terminals; Unix-like
/// systems are assumed to handle them.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> &'static str {
    match (supports_unicode(), suit) {
        (true, Suit::Hearts) => "♥",
        (true, Suit::Diamonds) => "♦",
        (true, Suit::Clubs) => "♣",
        (true, Suit::Spades) => "♠",
        (false, Suit::Hearts) => "h",
        (false, Suit::Diamonds) => "d",
        (false, Suit::Clubs) => "c",
        (false, Suit::Spades) => "s",
    }
}

pub fn format_rank(rank: &Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Space separated cards without brackets, e.g. `A♠ K♥`.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Board in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}

/// One applied action, e.g. `alice raises 20 (30 in)`.
///
/// ```rust
/// use holdem_engine::history::{ActionRecord, Street};
/// use holdem_engine::player::PlayerAction;
/// # use holdem_cli::formatters::format_action;
///
/// let rec = ActionRecord {
///     seat: 1,
///     name: "bob".into(),
///     street: Street::Flop,
///     action: PlayerAction::Call,
///     amount: 40,
/// };
/// assert_eq!(format_action(&rec), "bob calls 40");
/// ```
pub fn format_action(record: &ActionRecord) -> String {
    let who = &record.name;
    match record.action {
        PlayerAction::Fold => format!("{who} folds"),
        PlayerAction::Check => format!("{who} checks"),
        PlayerAction::Call => format!("{who} calls {}", record.amount),
        PlayerAction::Raise(by) => format!("{who} raises {by} ({} in)", record.amount),
        PlayerAction::AllIn => format!("{who} is all-in for {}", record.amount),
    }
}
