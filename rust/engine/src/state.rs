use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Chip count every new game starts with.
pub const STARTING_CHIPS: u32 = 3;

/// The player's call on the next card relative to the current one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    /// Next card will rank above the current card
    Higher,
    /// Next card will rank below the current card
    Lower,
}

impl Guess {
    pub fn as_str(&self) -> &'static str {
        match self {
            Guess::Higher => "higher",
            Guess::Lower => "lower",
        }
    }
}

/// Result of a resolved round. A tie in ranks is a loss; it is only tagged
/// separately for commentary selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Guess matched the draw direction
    Win,
    /// Wrong direction or equal ranks
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }
}

/// Authoritative snapshot of one game in progress.
///
/// States are values: every transition consumes a snapshot by reference and
/// returns a brand-new one, so callers can retain prior snapshots for
/// undo/display/logging without aliasing hazards. Once `game_over` is true
/// no further transitions are accepted except a no-op message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Player's current stake, never reported negative
    pub chips: u32,
    /// Remaining undrawn cards, consumed from the front
    pub deck: Vec<Card>,
    /// Card the next guess is evaluated against
    pub current_card: Card,
    /// Card revealed by the most recent round, for display
    #[serde(default)]
    pub last_drawn_card: Option<Card>,
    /// Win or loss from the most recent round
    #[serde(default)]
    pub last_outcome: Option<Outcome>,
    /// Chip change from the most recent round (+bet or -bet)
    #[serde(default)]
    pub last_delta: Option<i64>,
    /// Latest status/commentary text
    pub message: String,
    /// Terminal flag: chips depleted or deck exhausted
    pub game_over: bool,
}
