use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ContactIntent {
    /// Append a character to the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus to the next/previous field (wrapping).
    FocusNext,
    FocusPrev,
    /// Submit the form. Fields are trimmed; an empty name or message means
    /// there is nothing to send and the submit is ignored.
    Submit { now_ms: u64 },
    /// Time advanced; complete a pending submission whose delay elapsed.
    Tick { now_ms: u64 },
    /// Dismiss the confirmation and return to a cleared form.
    Dismiss,
}

impl Intent for ContactIntent {}
