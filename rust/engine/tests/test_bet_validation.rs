use hilo_engine::deck::seeded_source;
use hilo_engine::round::{commit_guess, initial_state_with_source};
use hilo_engine::state::{GameState, Guess};

fn fresh() -> GameState {
    initial_state_with_source(seeded_source(42))
}

#[test]
fn fractional_bet_is_rejected() {
    let state = fresh();
    let result = commit_guess(&state, Guess::Higher, 2.5);
    assert_eq!(result.message, "Bet must be a whole number.");
    assert_eq!(result.chips, state.chips);
    assert_eq!(result.deck, state.deck);
    assert_eq!(result.current_card, state.current_card);
    assert!(!result.game_over);
}

#[test]
fn non_finite_bet_is_rejected_as_not_whole() {
    let state = fresh();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = commit_guess(&state, Guess::Higher, bad);
        assert_eq!(result.message, "Bet must be a whole number.");
        assert_eq!(result.chips, state.chips);
    }
}

#[test]
fn bet_above_chips_is_rejected_with_range() {
    let state = fresh();
    let result = commit_guess(&state, Guess::Higher, 10.0);
    assert_eq!(result.message, "Bet must be between 1 and 3.");
    assert_eq!(result.chips, state.chips);
    assert_eq!(result.deck.len(), state.deck.len());
}

#[test]
fn zero_bet_is_rejected_with_range() {
    let state = fresh();
    let result = commit_guess(&state, Guess::Lower, 0.0);
    assert!(result.message.contains("between 1 and"));
    assert_eq!(result.chips, state.chips);
}

#[test]
fn negative_bet_is_rejected_with_range() {
    let state = fresh();
    let result = commit_guess(&state, Guess::Lower, -2.0);
    assert!(result.message.contains("between 1 and"));
    assert_eq!(result.chips, state.chips);
}

#[test]
fn committed_guess_on_finished_game_is_a_noop() {
    let mut state = fresh();
    state.game_over = true;
    let result = commit_guess(&state, Guess::Higher, 1.0);
    assert!(result.message.contains("Game is over"));
    assert_eq!(result.chips, state.chips);
    assert_eq!(result.deck, state.deck);
    assert!(result.game_over);
}

#[test]
fn game_over_check_precedes_bet_validation() {
    let mut state = fresh();
    state.game_over = true;
    // an invalid bet on a finished game still yields the game-over no-op
    let result = commit_guess(&state, Guess::Higher, 2.5);
    assert!(result.message.contains("Game is over"));
}

#[test]
fn rejection_does_not_touch_round_history() {
    let state = fresh();
    let result = commit_guess(&state, Guess::Higher, 0.0);
    assert_eq!(result.last_drawn_card, state.last_drawn_card);
    assert_eq!(result.last_outcome, state.last_outcome);
    assert_eq!(result.last_delta, state.last_delta);
}
