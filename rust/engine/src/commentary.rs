//! Table-talk selection for round outcomes.
//!
//! The resolver hands this module a small tagged context and gets back an
//! opaque line of dealer chatter. Nothing in here affects game logic; any
//! non-empty string satisfies the contract, and callers must not branch on
//! the returned text.

use rand::Rng;

/// Why a game ended, for terminal commentary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameOverReason {
    /// Chips ran out
    Chips,
    /// Deck ran out
    Deck,
    /// Host-tracked session best (no persistence; hosts decide when to use it)
    HighScore,
}

/// Outcome category plus the context the text templates interpolate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MessageContext {
    /// New game, fresh deck
    Start,
    /// Correct guess; `chips` is the post-settlement stake
    Win { bet: u32, chips: u32 },
    /// Wrong guess or tie; `tie` selects the equal-ranks lines
    Loss { bet: u32, chips: u32, tie: bool },
    /// Terminal state commentary
    GameOver {
        reason: GameOverReason,
        chips: Option<u32>,
    },
}

/// Picks one line of dealer chatter for the given context.
pub fn select_commentary(context: &MessageContext) -> String {
    let pool = message_pool(context);
    let idx = rand::rng().random_range(0..pool.len());
    pool[idx].clone()
}

/// Candidate lines per category. Always non-empty.
fn message_pool(context: &MessageContext) -> Vec<String> {
    match *context {
        MessageContext::Start => vec![
            "Fresh deck, fresh chances. Higher or lower than the card in front of you? \
             You start with 3 chips. Try to keep them."
                .to_string(),
            "New game. Call the next card higher or lower, bet what you dare. \
             Ties go to the house. Three chips, make them count."
                .to_string(),
            "Cards are shuffled. Guess the direction of the next draw and name your bet. \
             Equal ranks lose, house rules. You have 3 chips."
                .to_string(),
            "Here we go again. Higher or lower, one bet per round, ties are mine. \
             Your bankroll: 3 chips."
                .to_string(),
            "Take a seat. Pick higher or lower, wager up to your whole stack. \
             Right pays the bet, wrong or tied forfeits it. Starting chips: 3."
                .to_string(),
        ],
        MessageContext::Win { bet, chips } => match bet {
            1 => vec![
                "One whole chip. The house trembles.".to_string(),
                "A single chip win. Careful, that almost looked like strategy.".to_string(),
                "You win one. I'll allow it.".to_string(),
                "Chip for you. Don't frame it or anything.".to_string(),
                format!("One chip richer, {} total. Momentum, technically.", chips),
            ],
            2 => vec![
                "Two chips. Someone came to play.".to_string(),
                "Decent call. Two chips your way.".to_string(),
                format!("Two chips won, {} in the stack. Keep it up, or don't.", chips),
                "Right call, double payout. Luck, probably.".to_string(),
                "Two chips off the house. I felt nothing.".to_string(),
            ],
            _ => vec![
                format!("{} chips?! Fine. Take them.", bet),
                format!("A {}-chip hit. The house noticed.", bet),
                format!("Bold bet, right call. {} chips over.", bet),
                format!("{} chips won. Enjoy the peak, the slide is next.", bet),
                format!("All right, {} chips. Someone check this deck.", bet),
            ],
        },
        MessageContext::Loss { bet, chips, tie } => {
            if tie {
                vec![
                    "Equal ranks. That goes to the house, always has.".to_string(),
                    "A tie! Which is to say, a loss. Read the fine print.".to_string(),
                    "Same rank twice. The house thanks you for your donation.".to_string(),
                    "Matched ranks, house wins. My favorite rule.".to_string(),
                    "So close it matched exactly. Still mine.".to_string(),
                ]
            } else {
                match bet {
                    1 => vec![
                        "One chip to the house. It adds up.".to_string(),
                        "Wrong way. A chip slides across the felt.".to_string(),
                        format!("Minus one, {} left. Breathe.", chips),
                        "That chip has a new home now.".to_string(),
                        "One down. It happens. To you, frequently.".to_string(),
                    ],
                    _ => vec![
                        format!("{} chips, gone. Brave bet though.", bet),
                        format!("Wrong call, {} chips lighter.", bet),
                        format!("The house accepts your {} chips.", bet),
                        format!("Minus {}. You have {} left, spend them wisely.", bet, chips),
                        format!("{} chips to the felt. Want to talk about it?", bet),
                    ],
                }
            }
        }
        MessageContext::GameOver { reason, chips } => match reason {
            GameOverReason::Chips => vec![
                "Out of chips. The house always appreciates a regular.".to_string(),
                "Zero chips. That concludes our business.".to_string(),
                "Broke. A new game fixes that, briefly.".to_string(),
                "Your stack is gone. The chairs are free, at least.".to_string(),
                "No chips left. Thanks for the entertainment.".to_string(),
            ],
            GameOverReason::Deck => {
                let chips = chips.unwrap_or_default();
                vec![
                    format!("Deck is done. You walk away with {} chips. Respectable.", chips),
                    format!("No cards left. Final score: {} chips.", chips),
                    format!("Out of cards. {} chips survived you.", chips),
                    format!("That was the last card. {} chips is your tally.", chips),
                    format!("Deck exhausted. You kept {} chips from the house.", chips),
                ]
            }
            GameOverReason::HighScore => {
                let chips = chips.unwrap_or_default();
                vec![
                    format!("New session best: {} chips. The house pretends not to care.", chips),
                    format!("{} chips, a new high. Savor it.", chips),
                    format!("Session record: {} chips. Beginner's arc, surely.", chips),
                    format!("A fresh best of {} chips. Noted, grudgingly.", chips),
                ]
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_contexts() -> Vec<MessageContext> {
        vec![
            MessageContext::Start,
            MessageContext::Win { bet: 1, chips: 4 },
            MessageContext::Win { bet: 2, chips: 5 },
            MessageContext::Win { bet: 3, chips: 6 },
            MessageContext::Loss {
                bet: 1,
                chips: 2,
                tie: false,
            },
            MessageContext::Loss {
                bet: 3,
                chips: 0,
                tie: false,
            },
            MessageContext::Loss {
                bet: 2,
                chips: 1,
                tie: true,
            },
            MessageContext::GameOver {
                reason: GameOverReason::Chips,
                chips: None,
            },
            MessageContext::GameOver {
                reason: GameOverReason::Deck,
                chips: Some(7),
            },
            MessageContext::GameOver {
                reason: GameOverReason::HighScore,
                chips: Some(9),
            },
        ]
    }

    #[test]
    fn every_category_yields_nonempty_text() {
        for ctx in all_contexts() {
            let msg = select_commentary(&ctx);
            assert!(!msg.is_empty(), "empty commentary for {:?}", ctx);
        }
    }

    #[test]
    fn pools_are_never_empty() {
        for ctx in all_contexts() {
            assert!(!message_pool(&ctx).is_empty(), "empty pool for {:?}", ctx);
        }
    }

    #[test]
    fn deck_game_over_mentions_final_chips() {
        let ctx = MessageContext::GameOver {
            reason: GameOverReason::Deck,
            chips: Some(7),
        };
        for line in message_pool(&ctx) {
            assert!(line.contains('7'), "missing chip count in {:?}", line);
        }
    }
}
