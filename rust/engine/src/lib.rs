//! # holdem-engine: Texas Hold'em round engine
//!
//! A deterministic engine for one Texas Hold'em table: hand ranking, a
//! round state machine with dealer and blind rotation, and a betting street
//! orchestrator that asks pluggable [`player::Player`]s for their actions.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card text parsing
//! - [`deck`] - Seeded deck with discard pile
//! - [`hand`] - Hand evaluation into an ordered [`hand::HandScore`]
//! - [`table`] - Round state machine: seating, blinds, reveals, showdown
//! - [`betting`] - One betting street: action order, pot mutations, street close
//! - [`player`] - Player contract and seated contestant state
//! - [`history`] - Action and round records, JSONL round logger
//! - [`config`] - Table stakes
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::betting::run_street;
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::player::{ActionRequest, Contestant, PlayerAction};
//! use holdem_engine::table::{RoundState, Table};
//!
//! fn calling(_: &ActionRequest<'_>) -> PlayerAction {
//!     PlayerAction::Call
//! }
//!
//! let mut table = Table::new(TableConfig::default(), 42).unwrap();
//! table.add_contestant(Contestant::new("alice", 1_000, Box::new(calling))).unwrap();
//! table.add_contestant(Contestant::new("bob", 1_000, Box::new(calling))).unwrap();
//! table.start_new_round().unwrap();
//!
//! while table.state() != RoundState::Showdown {
//!     run_street(&mut table).unwrap();
//!     table.deal_community_cards().unwrap();
//! }
//! let result = table.evaluate_winner().unwrap();
//! assert_eq!(result.pot, 20);
//! assert_eq!(table.state(), RoundState::GameOver);
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod history;
pub mod player;
pub mod table;
