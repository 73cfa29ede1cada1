//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    author,
    version,
    about = "Texas Hold'em rounds against AI opponents"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds against an AI opponent, or watch two AIs
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate AI vs AI rounds and optionally record them as JSONL
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one seeded heads-up round to the river and show both hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate private cards against a board
    Hand {
        #[arg(long)]
        hole: String,
        #[arg(long, default_value = "")]
        board: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// You act from the terminal against an AI.
    Human,
    /// Two AIs play while you watch.
    Ai,
}

impl Vs {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_flags() {
        let cli = HoldemCli::try_parse_from([
            "holdem", "play", "--vs", "ai", "--rounds", "3", "--seed", "9",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play { vs, rounds, seed } => {
                assert_eq!(vs, Vs::Ai);
                assert_eq!(rounds, Some(3));
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn sim_requires_rounds() {
        assert!(HoldemCli::try_parse_from(["holdem", "sim"]).is_err());
    }

    #[test]
    fn vs_as_str() {
        assert_eq!(Vs::Ai.as_str(), "ai");
        assert_eq!(Vs::Human.as_str(), "human");
    }
}
