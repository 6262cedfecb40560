//! Contact form state: field editing plus the locally simulated submission.

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactField, ContactFormState, SUBMIT_DELAY_MS};
