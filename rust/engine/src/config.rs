use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default starting stack for each contestant in chips
pub const STARTING_STACK: u32 = 1_000;

/// Fixed stakes for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Smallest increment a raise adds on top of the call
    pub min_raise: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            min_raise: 20,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidConfig("blinds must be > 0".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidConfig(
                "small blind must not exceed big blind".into(),
            ));
        }
        if self.min_raise == 0 {
            return Err(GameError::InvalidConfig("min_raise must be > 0".into()));
        }
        Ok(())
    }
}
