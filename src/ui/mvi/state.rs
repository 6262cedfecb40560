/// Marker trait for UI state objects.
///
/// States are self-contained (everything the view needs to render),
/// comparable (so redraw decisions can diff) and cheap to clone.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
