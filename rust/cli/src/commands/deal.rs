//! Deal command handler for starting-state inspection.
//!
//! Deals a fresh game state and prints the visible table without starting an
//! interactive session. Supports optional seeding for deterministic output.
//! The dealer's randomized chatter is deliberately left out so output for a
//! given seed is stable.

use crate::error::CliError;
use crate::formatters::format_card;
use hilo_engine::deck::seeded_source;
use hilo_engine::round::initial_state_with_source;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let state = initial_state_with_source(seeded_source(seed));

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Current card: {}", format_card(&state.current_card))?;
    writeln!(out, "Cards left: {}", state.deck.len())?;
    writeln!(out, "Chips: {}", state.chips)?;
    Ok(())
}
