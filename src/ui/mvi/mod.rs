//! Model-View-Intent primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every piece of mutable UI state lives in a state struct advanced by a
//! pure reducer. Timers are not side effects here: intents carry an explicit
//! timestamp (milliseconds since app start) and transient states carry their
//! deadline, so every timing behavior is testable without sleeping.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
