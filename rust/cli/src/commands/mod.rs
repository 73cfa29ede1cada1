//! Command handler modules.
//!
//! Each subcommand lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated via `CliError`; [`crate::run`] maps them to exit codes

mod cfg;
mod deal;
mod hand;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use hand::handle_hand_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config::{self, Config};
use crate::error::CliError;

fn load_config() -> Result<Config, CliError> {
    config::load().map_err(|e| CliError::Config(e.to_string()))
}
