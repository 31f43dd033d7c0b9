//! Card and chip-delta formatters for terminal display.
//!
//! Pure functions for rendering game elements in the terminal. Suits use
//! Unicode symbols with an ASCII fallback for terminal environments that
//! don't render them.
//!
//! ## Example
//!
//! ```rust
//! use hilo_engine::cards::{Card, Rank, Suit};
//! use hilo_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use hilo_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn suit_symbol(suit: &Suit, unicode: bool) -> &'static str {
    if unicode {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Format a Suit using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    suit_symbol(suit, supports_unicode()).to_string()
}

/// Format a Rank as a string (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        other => other.value().to_string(),
    }
}

/// Format a card as rank followed by suit, e.g. "Q♥" or "Qh".
pub fn format_card(card: &Card) -> String {
    format_card_with(card, !supports_unicode())
}

/// Format a card with an explicit ASCII preference, for hosts whose
/// configuration overrides terminal detection.
pub fn format_card_with(card: &Card, ascii: bool) -> String {
    format!("{}{}", format_rank(&card.rank), suit_symbol(&card.suit, !ascii))
}

/// Format a chip delta with an explicit sign, e.g. "+2" or "-1".
pub fn format_delta(delta: i64) -> String {
    if delta >= 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}
