use thiserror::Error;

/// Contract-violation errors raised by the engine.
///
/// User input problems (bad guesses, out-of-range bets) are never errors;
/// they are absorbed into the returned [`crate::state::GameState`] with an
/// explanatory message. This enum covers caller bugs only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw from empty deck")]
    EmptyDeck,
}
