//! # hilo-engine: Higher/Lower Game Engine Core
//!
//! A deterministic state engine for a single-player higher/lower card
//! wagering game. A dealer shows a card, the player bets chips on whether
//! the next draw ranks higher or lower, ties always lose, and the game ends
//! when the chips or the deck run out. Every transition is a pure function
//! from an immutable snapshot to a new one.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Deck construction, Fisher-Yates shuffling with injectable
//!   randomness, copy-on-write drawing
//! - [`state`] - Game snapshots (GameState) and round vocabulary
//!   (Guess, Outcome)
//! - [`round`] - Round resolution: validation, outcome, settlement,
//!   terminal detection
//! - [`commentary`] - Dealer chatter selection by outcome category
//! - [`record`] - Game history records and JSONL logging
//! - [`errors`] - Contract-violation error types
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::deck::seeded_source;
//! use hilo_engine::round::{commit_guess, initial_state_with_source};
//! use hilo_engine::state::Guess;
//!
//! // Seeded games are fully reproducible
//! let state = initial_state_with_source(seeded_source(42));
//! assert_eq!(state.chips, 3);
//! assert_eq!(state.deck.len(), 51);
//!
//! // Committing a guess returns a new snapshot; the input is untouched
//! let next = commit_guess(&state, Guess::Higher, 1.0);
//! assert_eq!(state.deck.len(), 51);
//! assert_eq!(next.deck.len(), 50);
//! ```
//!
//! ## Input Validation
//!
//! Bad player input never raises an error; it comes back as the same state
//! with an explanatory message:
//!
//! ```rust
//! use hilo_engine::deck::seeded_source;
//! use hilo_engine::round::{commit_guess, initial_state_with_source};
//! use hilo_engine::state::Guess;
//!
//! let state = initial_state_with_source(seeded_source(7));
//! let rejected = commit_guess(&state, Guess::Lower, 2.5);
//! assert_eq!(rejected.message, "Bet must be a whole number.");
//! assert_eq!(rejected.chips, state.chips);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use hilo_engine::deck::{new_deck, seeded_source, shuffle};
//!
//! // Same seed produces the same permutation
//! let a = shuffle(&new_deck(), seeded_source(1));
//! let b = shuffle(&new_deck(), seeded_source(1));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod commentary;
pub mod deck;
pub mod errors;
pub mod record;
pub mod round;
pub mod state;
