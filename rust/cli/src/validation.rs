//! Input parsing for the interactive play command.
//!
//! Turns raw prompt input into structured round decisions. Bets are kept as
//! raw floats on purpose: the engine owns bet validation, and forwarding the
//! unchecked number means every rejection message the player sees comes from
//! the resolver, not from a second copy of the rules here.

use hilo_engine::state::Guess;

/// Result type for parsing user input into round decisions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A guess with a bet amount, ready for the resolver
    Round { guess: Guess, bet: f64 },
    /// User asked to start a new game (n or new)
    NewGame,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a round decision or a session command.
///
/// Accepts the following input formats (case-insensitive):
/// - "h X" or "higher X" → guess higher with bet X
/// - "l X" or "lower X" → guess lower with bet X
/// - "n" or "new" → start a new game
/// - "q" or "quit" → quit the session
///
/// # Example
///
/// ```rust
/// # use hilo_cli::validation::{parse_round_input, ParseResult};
/// use hilo_engine::state::Guess;
///
/// assert_eq!(
///     parse_round_input("higher 2"),
///     ParseResult::Round { guess: Guess::Higher, bet: 2.0 }
/// );
///
/// assert_eq!(parse_round_input("q"), ParseResult::Quit);
///
/// match parse_round_input("sideways 1") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_round_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => return ParseResult::Quit,
        "n" | "new" => return ParseResult::NewGame,
        _ => {}
    }

    let guess = match parts[0] {
        "h" | "higher" => Guess::Higher,
        "l" | "lower" => Guess::Lower,
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized input '{}'. Try 'higher 2', 'lower 1', 'n' or 'q'.",
                other
            ));
        }
    };

    if parts.len() < 2 {
        return ParseResult::Invalid(format!(
            "A guess needs a bet (e.g., '{} 1')",
            guess.as_str()
        ));
    }

    match parts[1].parse::<f64>() {
        // the engine decides whether the number is an acceptable bet
        Ok(bet) => ParseResult::Round { guess, bet },
        Err(_) => ParseResult::Invalid(format!("Invalid bet amount '{}'", parts[1])),
    }
}
