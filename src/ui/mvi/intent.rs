/// Marker trait for intents: user gestures or timer ticks that a reducer
/// turns into a new state.
pub trait Intent: Send + 'static {}
