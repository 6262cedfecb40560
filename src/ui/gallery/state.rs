use crate::content::projects::{self, Project, ALL_CATEGORIES};
use crate::ui::mvi::UiState;

/// Delay between consecutive card entrance animations.
pub const STAGGER_STEP_MS: u64 = 80;

/// Currently selected gallery filter.
///
/// `applied_at_ms` is the moment the filter was applied; the displayed list
/// is fully replaced at that point and each card runs its own entrance
/// animation, staggered by `index * STAGGER_STEP_MS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub selected: String,
    pub applied_at_ms: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
            applied_at_ms: 0,
        }
    }
}

impl UiState for GalleryState {}

impl GalleryState {
    /// The catalog subsequence for the current filter.
    pub fn visible_projects(&self) -> Vec<&'static Project> {
        projects::filter(&self.selected)
    }

    /// How many cards have started their entrance animation by `now_ms`.
    pub fn revealed_cards(&self, total: usize, now_ms: u64) -> usize {
        let elapsed = now_ms.saturating_sub(self.applied_at_ms);
        ((elapsed / STAGGER_STEP_MS) as usize + 1).min(total)
    }
}
