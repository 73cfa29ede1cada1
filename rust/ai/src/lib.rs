//! # holdem-ai: computer opponents
//!
//! [`Player`] implementations that plug into a `holdem_engine` table.
//!
//! ## Core Components
//!
//! - [`baseline`] - Rule-based opponent using hand strength and pot odds
//! - [`passive`] - Opponent that only checks and calls
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::player::Contestant;
//! use holdem_engine::table::Table;
//!
//! let mut table = Table::new(TableConfig::default(), 42).unwrap();
//! for (name, seed) in [("north", 1), ("south", 2)] {
//!     let ai = create_ai("baseline", seed).expect("known AI");
//!     table.add_contestant(Contestant::new(name, 1_000, ai)).unwrap();
//! }
//! table.start_new_round().unwrap();
//! ```

use holdem_engine::player::Player;

pub mod baseline;
pub mod passive;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["baseline", "passive"];

/// Creates an AI opponent by name. `seed` drives any randomized decisions.
///
/// Returns `None` for an unknown name.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// assert!(create_ai("baseline", 1).is_some());
/// assert!(create_ai("oracle", 1).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn Player>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineAI::new(seed))),
        "passive" => Some(Box::new(passive::PassiveAI)),
        _ => None,
    }
}
