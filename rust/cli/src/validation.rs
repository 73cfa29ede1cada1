//! Input parsing for interactive commands.

use holdem_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a PlayerAction or the quit command.
///
/// Accepted (case-insensitive): `f`/`fold`, `k`/`check`, `c`/`call`,
/// `r N`/`raise N` (raise by N over the call), `a`/`allin`/`all-in`,
/// `q`/`quit`.
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("raise 40"), ParseResult::Action(PlayerAction::Raise(40)));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// match parse_player_action("bluff") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" | "a" => ParseResult::Action(PlayerAction::AllIn),
        "raise" | "r" => match parts.get(1).map(|v| v.parse::<u32>()) {
            None => ParseResult::Invalid("Raise requires an amount (e.g., 'raise 20')".to_string()),
            Some(Ok(amount)) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid raise amount".to_string()),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, allin, q",
            other
        )),
    }
}
