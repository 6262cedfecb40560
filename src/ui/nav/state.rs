use crate::content::sections::{SectionId, Variant};
use crate::ui::mvi::UiState;

/// How long the transient enter/exit phases last before cleanup.
pub const TRANSITION_MS: u64 = 600;

/// Lifecycle of one section.
///
/// `Entering` counts as logically active and `Exiting` as logically
/// inactive; the variant and deadline only drive the cosmetic animation.
/// Promotion to the settled state happens when a tick observes that the
/// deadline has passed, which makes cleanup idempotent: a deadline that was
/// superseded by a later navigation no longer matches any transient phase
/// and simply never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPhase {
    #[default]
    Inactive,
    Entering {
        variant: Variant,
        until_ms: u64,
    },
    Active,
    Exiting {
        variant: Variant,
        until_ms: u64,
    },
}

impl SectionPhase {
    /// Whether the section is the logically active one.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Entering { .. } | Self::Active)
    }

    /// Whether the section still carries a transient animation tag.
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Entering { .. } | Self::Exiting { .. })
    }
}

/// Navigation state: per-section phases plus the nav menu overlay.
///
/// Invariant: exactly one section is logically active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub(super) phases: [SectionPhase; SectionId::COUNT],
    pub menu_open: bool,
    pub menu_selected: usize,
}

impl Default for NavState {
    fn default() -> Self {
        let mut phases = [SectionPhase::Inactive; SectionId::COUNT];
        phases[SectionId::Home.index()] = SectionPhase::Active;
        Self {
            phases,
            menu_open: false,
            menu_selected: 0,
        }
    }
}

impl UiState for NavState {}

impl NavState {
    pub fn phase(&self, id: SectionId) -> SectionPhase {
        self.phases[id.index()]
    }

    /// The logically active section.
    pub fn active_section(&self) -> SectionId {
        SectionId::ALL
            .iter()
            .copied()
            .find(|&id| self.phase(id).is_active())
            .expect("exactly one section is always active")
    }

    /// True once no section carries a transient animation tag.
    pub fn is_settled(&self) -> bool {
        self.phases.iter().all(|phase| !phase.is_transient())
    }
}
