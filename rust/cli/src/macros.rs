//! Macros for common CLI error handling patterns.

/// Parse a JSON line or continue to the next iteration on error.
///
/// This macro handles the common pattern of parsing JSONL records where
/// parse errors should be counted and the iteration should continue.
///
/// # Examples
///
/// ```ignore
/// let record: GameRecord = parse_json_or_continue!(line, corrupted);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $corrupted:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(_) => {
                $corrupted += 1;
                continue;
            }
        }
    };
}
