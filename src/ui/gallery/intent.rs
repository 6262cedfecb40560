use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// Make this category the sole active filter and re-render the list.
    /// Re-selecting the current category re-runs the entrance animation.
    SelectCategory { category: String, now_ms: u64 },
}

impl Intent for GalleryIntent {}
