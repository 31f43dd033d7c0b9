//! Round resolution: the central state transition of the game.
//!
//! [`commit_guess`] validates the player's decision, advances the deck,
//! settles the bet, and produces a brand-new [`GameState`]. Invalid input is
//! never an error: it comes back as the unchanged state with only the
//! `message` field replaced, so hosts branch on state fields instead of
//! catching anything.

use crate::commentary::{select_commentary, GameOverReason, MessageContext};
use crate::deck::{draw, new_deck, shuffle, thread_source};
use crate::state::{GameState, Guess, Outcome, STARTING_CHIPS};

/// Creates the starting state of a new game: a fresh deck shuffled with real
/// randomness, one card drawn as the current card, 3 chips, no round history.
pub fn initial_state() -> GameState {
    initial_state_with_source(thread_source())
}

/// Same as [`initial_state`] but with an injectable randomness source, the
/// seam for reproducible games and deterministic tests. See
/// [`crate::deck::seeded_source`].
pub fn initial_state_with_source<F>(source: F) -> GameState
where
    F: FnMut() -> f64,
{
    let shuffled = shuffle(&new_deck(), source);
    // 52 cards just came out of new_deck, the draw cannot fail
    let (current_card, deck) = draw(&shuffled).expect("fresh deck is never empty");

    GameState {
        chips: STARTING_CHIPS,
        deck,
        current_card,
        last_drawn_card: None,
        last_outcome: None,
        last_delta: None,
        message: select_commentary(&MessageContext::Start),
        game_over: false,
    }
}

/// Resolves one round against `state` and returns the successor state.
///
/// `bet` is a raw numeric input of unconstrained origin; validating it is
/// this function's first responsibility. The checks run in order and each
/// rejection returns the input state with only `message` changed:
///
/// 1. game already over (idempotent no-op)
/// 2. bet not a whole number
/// 3. bet below 1 or above the current chip count
/// 4. deck empty before the draw (reachable only through externally
///    constructed states; flips `game_over` instead of drawing)
///
/// A passing round draws the next card, wins when the guessed direction
/// matches the rank comparison, and loses otherwise. Equal ranks always lose.
/// The game ends when chips reach zero or the last card has been drawn.
///
/// The input state is never mutated.
pub fn commit_guess(state: &GameState, guess: Guess, bet: f64) -> GameState {
    if state.game_over {
        return GameState {
            message: "Game is over. Click 'New Game' to play again.".to_string(),
            ..state.clone()
        };
    }

    if !bet.is_finite() || bet.fract() != 0.0 {
        return GameState {
            message: "Bet must be a whole number.".to_string(),
            ..state.clone()
        };
    }

    if bet < 1.0 || bet > f64::from(state.chips) {
        return GameState {
            message: format!("Bet must be between 1 and {}.", state.chips),
            ..state.clone()
        };
    }
    let bet = bet as u32;

    if state.deck.is_empty() {
        return exhausted(state);
    }
    // Deck length was checked above, so this draw cannot fail.
    let Ok((next_card, remaining)) = draw(&state.deck) else {
        return exhausted(state);
    };

    let next_rank = next_card.rank.value();
    let current_rank = state.current_card.rank.value();
    let (outcome, tie) = if next_rank > current_rank && guess == Guess::Higher {
        (Outcome::Win, false)
    } else if next_rank < current_rank && guess == Guess::Lower {
        (Outcome::Win, false)
    } else {
        // equal ranks or wrong direction
        (Outcome::Loss, next_rank == current_rank)
    };

    let delta = match outcome {
        Outcome::Win => i64::from(bet),
        Outcome::Loss => -i64::from(bet),
    };
    // settled may be transiently negative for the terminal check; the
    // persisted chip count is floored at zero
    let settled = i64::from(state.chips) + delta;
    let game_over = settled <= 0 || remaining.is_empty();
    let chips = settled.max(0) as u32;

    let message = if game_over {
        if settled <= 0 {
            select_commentary(&MessageContext::GameOver {
                reason: GameOverReason::Chips,
                chips: None,
            })
        } else {
            select_commentary(&MessageContext::GameOver {
                reason: GameOverReason::Deck,
                chips: Some(chips),
            })
        }
    } else {
        match outcome {
            Outcome::Win => select_commentary(&MessageContext::Win { bet, chips }),
            Outcome::Loss => select_commentary(&MessageContext::Loss { bet, chips, tie }),
        }
    };

    GameState {
        chips,
        deck: remaining,
        current_card: next_card,
        last_drawn_card: Some(next_card),
        last_outcome: Some(outcome),
        last_delta: Some(delta),
        message,
        game_over,
    }
}

fn exhausted(state: &GameState) -> GameState {
    GameState {
        game_over: true,
        message: "No more cards to draw. Game over!".to_string(),
        ..state.clone()
    }
}
