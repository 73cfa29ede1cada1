//! Error types for the CLI application.

use std::fmt;

use holdem_engine::cards::ParseCardError;
use holdem_engine::errors::GameError;

/// Custom error type for CLI operations.
///
/// Command handlers return it so failures propagate with `?`; [`crate::run`]
/// reports it on stderr and maps it to exit code `2`.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine rejected an operation
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ParseCardError> for CliError {
    fn from(error: ParseCardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e: CliError = GameError::NotEnoughPlayers { found: 1 }.into();
        assert_eq!(
            e.to_string(),
            "Engine error: At least 2 contestants are required, found 1"
        );
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn card_parse_errors_are_invalid_input() {
        let e: CliError = "Zz".parse::<holdem_engine::cards::Card>().unwrap_err().into();
        assert!(matches!(e, CliError::InvalidInput(_)));
    }
}
