//! # Play Command
//!
//! Interactive higher/lower session against the house.
//!
//! The loop shows the table (chips, cards left, current card, dealer
//! chatter), reads a guess and bet per round, and forwards the raw bet to the
//! resolver so every rejection message the player sees is the engine's own.
//! `n` starts a new game (each game derives its seed from the session seed),
//! `q` or EOF ends the session. The best final chip count of the session is
//! tracked in memory only.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card_with, format_delta, supports_unicode};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_round_input};
use hilo_engine::commentary::{GameOverReason, MessageContext, select_commentary};
use hilo_engine::deck::seeded_source;
use hilo_engine::round::{commit_guess, initial_state_with_source};
use hilo_engine::state::GameState;
use std::io::{BufRead, Write};

/// Handle the play command: interactive higher/lower gameplay.
///
/// # Arguments
///
/// * `seed` - Session seed for reproducibility (default: random; config
///   `default_seed` applies when present)
/// * `out` - Output stream for game display
/// * `err` - Error stream for input problems
/// * `stdin` - Input stream for player decisions
///
/// # Returns
///
/// * `Ok(())` on normal session end (quit or EOF)
/// * `Err(CliError)` on configuration or I/O errors
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let ascii = cfg.ascii_cards || !supports_unicode();
    let session_seed = seed.or(cfg.default_seed).unwrap_or_else(rand::random);

    writeln!(out, "play: seed={}", session_seed)?;

    let mut games_started: u64 = 1;
    let mut session_best: Option<u32> = None;
    let mut state = initial_state_with_source(seeded_source(session_seed));
    show_table(out, &state, ascii)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_round_input(&line) {
            ParseResult::Quit => break,
            ParseResult::NewGame => {
                // each game in the session gets its own derived seed
                let game_seed = session_seed.wrapping_add(games_started);
                games_started += 1;
                state = initial_state_with_source(seeded_source(game_seed));
                writeln!(out, "New game.")?;
                show_table(out, &state, ascii)?;
            }
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
            }
            ParseResult::Round { guess, bet } => {
                let was_over = state.game_over;
                let cards_before = state.deck.len();
                state = commit_guess(&state, guess, bet);

                let resolved = state.deck.len() != cards_before;
                show_round(out, &state, ascii, resolved)?;

                if state.game_over && !was_over {
                    if state.chips > 0 && session_best.is_none_or(|best| state.chips > best) {
                        session_best = Some(state.chips);
                        let line = select_commentary(&MessageContext::GameOver {
                            reason: GameOverReason::HighScore,
                            chips: Some(state.chips),
                        });
                        writeln!(out, "{}", line)?;
                    }
                    writeln!(out, "Game over. 'n' starts a new game, 'q' quits.")?;
                }
            }
        }
    }

    let best = session_best
        .map(|b| b.to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "Session games={} best={}", games_started, best)?;
    Ok(())
}

fn show_table(out: &mut dyn Write, state: &GameState, ascii: bool) -> std::io::Result<()> {
    writeln!(out, "{}", state.message)?;
    writeln!(
        out,
        "Chips: {}  Cards left: {}",
        state.chips,
        state.deck.len()
    )?;
    writeln!(
        out,
        "Current card: {}",
        format_card_with(&state.current_card, ascii)
    )
}

/// Print the result of a commit. `resolved` distinguishes a played round
/// from a rejection, which only changes the message.
fn show_round(
    out: &mut dyn Write,
    state: &GameState,
    ascii: bool,
    resolved: bool,
) -> std::io::Result<()> {
    if resolved {
        if let (Some(card), Some(outcome), Some(delta)) =
            (state.last_drawn_card, state.last_outcome, state.last_delta)
        {
            writeln!(
                out,
                "Drew {} ({}, {})",
                format_card_with(&card, ascii),
                outcome.as_str(),
                format_delta(delta)
            )?;
        }
    }
    writeln!(out, "{}", state.message)?;
    writeln!(
        out,
        "Chips: {}  Cards left: {}",
        state.chips,
        state.deck.len()
    )?;
    if !state.game_over {
        writeln!(
            out,
            "Current card: {}",
            format_card_with(&state.current_card, ascii)
        )?;
    }
    Ok(())
}
