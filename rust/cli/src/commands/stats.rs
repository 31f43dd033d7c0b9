//! Statistics aggregation command for game history analysis.
//!
//! Reads a JSONL file of [`GameRecord`]s (as written by `sim`) and prints
//! summary metrics. Corrupted lines are counted and reported but never abort
//! the aggregation.

use crate::error::CliError;
use crate::parse_json_or_continue;
use crate::ui;
use hilo_engine::record::{EndReason, GameRecord};
use std::io::Write;

/// Aggregates statistics from a JSONL game history file.
///
/// # Arguments
///
/// * `input` - Path to the JSONL history file
/// * `out` - Output stream for the statistics report
/// * `err` - Output stream for warnings about skipped records
///
/// # Returns
///
/// `Ok(())` when at least one record was aggregated; `Err` when the file is
/// unreadable or holds no parseable records.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(&input)?;

    let mut games: u64 = 0;
    let mut busted: u64 = 0;
    let mut deck_outs: u64 = 0;
    let mut rounds: u64 = 0;
    let mut total_final: u64 = 0;
    let mut best: u32 = 0;
    let mut corrupted: u64 = 0;

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let rec: GameRecord = parse_json_or_continue!(line, corrupted);

        games += 1;
        match rec.ended_by {
            EndReason::Chips => busted += 1,
            EndReason::Deck => deck_outs += 1,
        }
        rounds += rec.rounds.len() as u64;
        total_final += u64::from(rec.final_chips);
        best = best.max(rec.final_chips);
    }

    if corrupted > 0 {
        ui::write_error(err, &format!("{} corrupted record(s) skipped", corrupted))?;
    }
    if games == 0 {
        return Err(CliError::InvalidInput(format!(
            "no game records in {}",
            input
        )));
    }

    writeln!(out, "Games: {}", games)?;
    writeln!(out, "Busted: {}  Deck ran out: {}", busted, deck_outs)?;
    writeln!(out, "Rounds played: {}", rounds)?;
    writeln!(out, "Best final chips: {}", best)?;
    writeln!(
        out,
        "Mean final chips: {:.2}",
        total_final as f64 / games as f64
    )?;
    Ok(())
}
