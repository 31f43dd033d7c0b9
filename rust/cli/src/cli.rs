//! Command-line argument types for the hilo CLI.
//!
//! Defines the clap parser and the subcommand enum. Parsing is kept separate
//! from dispatch (see [`crate::run`]) so tests can exercise argument handling
//! with `try_parse_from` without touching any command logic.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `hilo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "hilo",
    version,
    about = "Higher/lower card wagering game against the house"
)]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All subcommands understood by the CLI.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against the house
    Play {
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a starting state and print it for inspection
    Deal {
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Autoplay games with a fixed policy, optionally recording histories
    Sim {
        /// Number of games to simulate
        #[arg(long, default_value_t = 1)]
        games: u64,
        /// Path for the JSONL game history (one record per line)
        #[arg(long)]
        output: Option<String>,
        /// Base RNG seed (game i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate statistics from a JSONL game history file
    Stats {
        /// Path to the history file
        #[arg(long)]
        input: String,
    },
    /// Display current configuration settings
    Cfg,
}
