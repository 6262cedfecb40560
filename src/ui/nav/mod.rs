//! Navigation state: which section is active, which sections are mid
//! transition, and whether the nav menu overlay is open.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, SectionPhase, TRANSITION_MS};
