use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerAction;

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop (private cards dealt)
    PreFlop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
}

/// Records a single resolved action during a round.
///
/// `action` is what was applied, not what the player asked for: an illegal
/// check shows up as [`PlayerAction::Fold`], a raise the stack cannot cover
/// as [`PlayerAction::AllIn`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index of the acting contestant
    pub seat: usize,
    pub name: String,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: PlayerAction,
    /// Chips moved into the pot by this action
    pub amount: u32,
}

/// Showdown outcome as stored in a round record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Evaluated hands as (seat, category name, score)
    pub hands: Vec<(usize, String, u32)>,
    /// More than one contestant shared the top score
    #[serde(default)]
    pub tied: bool,
}

/// Complete record of one round, serialized as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed used for deck shuffling (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of all applied actions
    pub actions: Vec<ActionRecord>,
    /// Community cards revealed (up to 5)
    pub board: Vec<Card>,
    /// Name of the contestant awarded the pot
    pub winner: Option<String>,
    pub pot: u32,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSONL file, one LF-terminated line each, and
/// numbers rounds as `YYYYMMDD-NNNNNN` starting at 1.
pub struct RoundLogger {
    sink: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Truncates or creates `path`, creating missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
            _ => {}
        }
        let file = File::create(path)?;
        Ok(Self {
            sink: Some(BufWriter::new(file)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; writes are discarded.
    pub fn detached(date: &str) -> Self {
        Self {
            sink: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    /// Writes one line and flushes it. A record without `ts` is stamped with
    /// the current UTC time.
    pub fn write(&mut self, record: &RoundRecord) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let stamped;
        let record = match record.ts {
            Some(_) => record,
            None => {
                stamped = RoundRecord {
                    ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
                    ..record.clone()
                };
                &stamped
            }
        };
        serde_json::to_writer(&mut *sink, record).map_err(io::Error::other)?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_makes_missing_directories() {
        let dir = Path::new("target")
            .join(format!("round_logger_{}", std::process::id()))
            .join("nested");
        let _ = fs::remove_dir_all(dir.parent().unwrap());
        let path = dir.join("rounds.jsonl");

        let mut logger = RoundLogger::create(&path).unwrap();
        assert!(logger.next_id().ends_with("-000001"));
        assert!(path.exists());
        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }
}
