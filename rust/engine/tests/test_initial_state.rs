use std::collections::HashSet;

use hilo_engine::deck::seeded_source;
use hilo_engine::round::{initial_state, initial_state_with_source};
use hilo_engine::state::STARTING_CHIPS;

#[test]
fn initial_state_starts_with_3_chips() {
    let state = initial_state();
    assert_eq!(state.chips, STARTING_CHIPS);
    assert_eq!(state.chips, 3);
}

#[test]
fn initial_state_has_51_cards_after_first_draw() {
    let state = initial_state();
    assert_eq!(state.deck.len(), 51);
}

#[test]
fn initial_state_current_card_is_in_rank_range() {
    let state = initial_state();
    let v = state.current_card.rank.value();
    assert!((2..=14).contains(&v));
}

#[test]
fn initial_state_is_not_terminal_and_has_no_history() {
    let state = initial_state();
    assert!(!state.game_over);
    assert!(state.last_drawn_card.is_none());
    assert!(state.last_outcome.is_none());
    assert!(state.last_delta.is_none());
}

#[test]
fn initial_state_carries_a_welcome_message() {
    let state = initial_state();
    assert!(!state.message.is_empty());
}

#[test]
fn initial_state_with_same_seed_is_reproducible() {
    let a = initial_state_with_source(seeded_source(5));
    let b = initial_state_with_source(seeded_source(5));
    assert_eq!(a.current_card, b.current_card);
    assert_eq!(a.deck, b.deck);
}

#[test]
fn current_card_plus_deck_cover_all_52_cards() {
    let state = initial_state_with_source(seeded_source(11));
    let mut set = HashSet::new();
    assert!(set.insert(state.current_card));
    for c in &state.deck {
        assert!(set.insert(*c), "duplicate card {:?}", c);
    }
    assert_eq!(set.len(), 52);
}
