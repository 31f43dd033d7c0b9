use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_ranks, all_suits, Card};
use crate::errors::GameError;

/// Builds the canonical 52-card starting deck in deterministic order:
/// suits in a fixed order (Clubs, Diamonds, Hearts, Spades), ranks Two
/// through Ace within each suit. No randomness.
pub fn new_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Returns a new vector containing the same cards in a pseudo-random
/// permutation. The input slice is left untouched.
///
/// The permutation is a Fisher–Yates backward pass driven by `source`, a
/// generator of floats in `[0, 1)`: for each index `i` from the last down to
/// 1, the swap partner is `floor(source() * (i + 1))`. Supplying a fixed
/// source yields a fixed, reproducible permutation; see [`seeded_source`].
pub fn shuffle<F>(deck: &[Card], mut source: F) -> Vec<Card>
where
    F: FnMut() -> f64,
{
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        // source contract is [0, 1); the min guards a generator that
        // returns an inclusive 1.0
        let j = ((source() * (i as f64 + 1.0)).floor() as usize).min(i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Removes and returns the front card of the deck along with the remaining
/// cards. The input slice is left untouched (copy-on-write).
///
/// # Errors
///
/// Returns [`GameError::EmptyDeck`] when called on a zero-length slice. That
/// is a caller bug, not a game event: callers are expected to check deck
/// length first.
pub fn draw(deck: &[Card]) -> Result<(Card, Vec<Card>), GameError> {
    match deck.split_first() {
        Some((&top, rest)) => Ok((top, rest.to_vec())),
        None => Err(GameError::EmptyDeck),
    }
}

/// Default randomness source backed by the thread RNG.
pub fn thread_source() -> impl FnMut() -> f64 {
    let mut rng = rand::rng();
    move || rng.random::<f64>()
}

/// Deterministic randomness source backed by ChaCha20. Same seed, same
/// float sequence, same shuffle.
pub fn seeded_source(seed: u64) -> impl FnMut() -> f64 {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    move || rng.random::<f64>()
}
