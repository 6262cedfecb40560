use crate::content::sections::{self, SectionId};
use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{NavState, SectionPhase, TRANSITION_MS};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Navigate { target, now_ms } => navigate(state, &target, now_ms),
            NavIntent::Tick { now_ms } => settle_elapsed(state, now_ms),
            NavIntent::ToggleMenu => {
                let mut state = state;
                state.menu_open = !state.menu_open;
                if state.menu_open {
                    state.menu_selected = state.active_section().index();
                }
                state
            }
            NavIntent::MenuUp => move_selection(state, SectionId::COUNT - 1),
            NavIntent::MenuDown => move_selection(state, 1),
        }
    }
}

/// The transition engine.
///
/// Both the outgoing and incoming animation use the variant registered for
/// the *target* section. The outgoing section loses the active flag
/// immediately; its exit animation is cosmetic overlap. Navigating while a
/// previous transition is still settling is fine: the target's phase is
/// overwritten wholesale, and the superseded deadlines become no-ops.
fn navigate(mut state: NavState, target: &str, now_ms: u64) -> NavState {
    let Some(section) = sections::lookup(target) else {
        return state;
    };
    if state.phase(section.id).is_active() {
        return state;
    }

    let variant = sections::variant_for(target);
    let until_ms = now_ms + TRANSITION_MS;

    let previous = state.active_section();
    state.phases[previous.index()] = SectionPhase::Exiting { variant, until_ms };
    state.phases[section.id.index()] = SectionPhase::Entering { variant, until_ms };
    state.menu_open = false;
    state
}

/// Scheduled cleanup: promote every transient phase whose deadline has
/// passed. Safe to run any number of times with any timestamp.
fn settle_elapsed(mut state: NavState, now_ms: u64) -> NavState {
    for phase in &mut state.phases {
        match *phase {
            SectionPhase::Entering { until_ms, .. } if now_ms >= until_ms => {
                *phase = SectionPhase::Active;
            }
            SectionPhase::Exiting { until_ms, .. } if now_ms >= until_ms => {
                *phase = SectionPhase::Inactive;
            }
            _ => {}
        }
    }
    state
}

fn move_selection(mut state: NavState, step: usize) -> NavState {
    if state.menu_open {
        state.menu_selected = (state.menu_selected + step) % SectionId::COUNT;
    }
    state
}
