use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Navigate to the section with the given string id. Unknown ids and
    /// the already-active section are silent no-ops. Closes the nav menu.
    Navigate { target: String, now_ms: u64 },
    /// Time advanced; settle any transient phase whose deadline has passed.
    Tick { now_ms: u64 },
    /// Open or close the nav menu overlay.
    ToggleMenu,
    /// Move the menu selection up or down (wrapping).
    MenuUp,
    MenuDown,
}

impl Intent for NavIntent {}
