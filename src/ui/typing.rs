//! Hero tagline typing effect.
//!
//! Purely a function of elapsed time: nothing to store, nothing to cancel.

/// Delay before the first character appears.
pub const TYPING_START_DELAY_MS: u64 = 1000;
/// Interval between characters.
pub const TYPING_INTERVAL_MS: u64 = 100;

/// The prefix of `text` that has been "typed" by `now_ms`.
pub fn revealed(text: &str, now_ms: u64) -> &str {
    let count = revealed_chars(text.chars().count(), now_ms);
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// How many characters are visible at `now_ms`, capped at `len`.
pub fn revealed_chars(len: usize, now_ms: u64) -> usize {
    if now_ms < TYPING_START_DELAY_MS {
        return 0;
    }
    let typed = (now_ms - TYPING_START_DELAY_MS) / TYPING_INTERVAL_MS + 1;
    (typed as usize).min(len)
}
