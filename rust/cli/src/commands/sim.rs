//! Simulation command handler for batch game generation.
//!
//! Autoplays complete games with a fixed policy and optionally records one
//! [`GameRecord`] per line (JSONL) for later aggregation with `stats`. Runs
//! are reproducible from the base seed alone: game `i` is played from
//! `seed + i`, and the policy has no randomness of its own.
//!
//! # Policy
//!
//! Guess toward the larger remaining rank range (rank 8 or below calls
//! higher, 9 and up calls lower) and always bet a single chip.

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use hilo_engine::cards::Card;
use hilo_engine::deck::seeded_source;
use hilo_engine::record::{EndReason, GameLogger, GameRecord, RoundRecord};
use hilo_engine::round::{commit_guess, initial_state_with_source};
use hilo_engine::state::Guess;
use std::io::Write;
use std::path::PathBuf;

/// Handle the sim command: autoplay N games and summarize the results.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `output` - JSONL path for game records (config `sim_output` applies
///   when absent; no file is written when both are unset)
/// * `seed` - Base RNG seed (default: random)
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
pub fn handle_sim_command(
    games: u64,
    output: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let output = output.or(cfg.sim_output);
    let base_seed = seed.or(cfg.default_seed).unwrap_or_else(rand::random);

    let mut logger = match &output {
        Some(p) => {
            let path = PathBuf::from(p);
            ensure_parent_dir(&path)?;
            Some(GameLogger::create(&path)?)
        }
        None => None,
    };

    let mut busted: u64 = 0;
    let mut deck_outs: u64 = 0;
    let mut total_rounds: u64 = 0;
    let mut total_final: u64 = 0;
    let mut best: u32 = 0;

    for g in 0..games {
        let game_seed = base_seed.wrapping_add(g);
        let mut state = initial_state_with_source(seeded_source(game_seed));
        let starting_card = state.current_card;
        let mut rounds = Vec::new();

        while !state.game_over {
            let guess = policy_guess(state.current_card);
            let next = commit_guess(&state, guess, 1.0);
            if let (Some(drawn), Some(outcome), Some(delta)) =
                (next.last_drawn_card, next.last_outcome, next.last_delta)
            {
                rounds.push(RoundRecord {
                    round: rounds.len() as u32 + 1,
                    guess,
                    bet: 1,
                    drawn,
                    outcome,
                    delta,
                    chips_after: next.chips,
                });
            }
            state = next;
        }

        let ended_by = if state.chips == 0 {
            EndReason::Chips
        } else {
            EndReason::Deck
        };
        match ended_by {
            EndReason::Chips => busted += 1,
            EndReason::Deck => deck_outs += 1,
        }
        total_rounds += rounds.len() as u64;
        total_final += u64::from(state.chips);
        best = best.max(state.chips);

        if let Some(logger) = logger.as_mut() {
            let record = GameRecord {
                game_id: logger.next_id(),
                seed: Some(game_seed),
                starting_card,
                rounds,
                final_chips: state.chips,
                ended_by,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "Simulated: {} games", games)?;
    writeln!(out, "Busted: {}  Deck ran out: {}", busted, deck_outs)?;
    writeln!(out, "Rounds played: {}", total_rounds)?;
    writeln!(
        out,
        "Mean final chips: {:.2}",
        total_final as f64 / games as f64
    )?;
    writeln!(out, "Best final chips: {}", best)?;
    Ok(())
}

/// Rank 8 or below leaves more room above, so call higher; 9 and up call
/// lower.
fn policy_guess(card: Card) -> Guess {
    if card.rank.value() <= 8 {
        Guess::Higher
    } else {
        Guess::Lower
    }
}
