use termfolio::content::sections::{SectionId, Variant};
use termfolio::ui::mvi::Reducer;
use termfolio::ui::nav::{NavIntent, NavReducer, NavState, SectionPhase, TRANSITION_MS};

fn navigate(state: NavState, target: &str, now_ms: u64) -> NavState {
    NavReducer::reduce(
        state,
        NavIntent::Navigate {
            target: target.to_string(),
            now_ms,
        },
    )
}

fn tick(state: NavState, now_ms: u64) -> NavState {
    NavReducer::reduce(state, NavIntent::Tick { now_ms })
}

#[test]
fn home_is_active_initially() {
    let state = NavState::default();
    assert_eq!(state.active_section(), SectionId::Home);
    assert!(state.is_settled());
}

#[test]
fn navigate_activates_target_synchronously() {
    for id in SectionId::ALL {
        let state = navigate(NavState::default(), id.as_str(), 0);
        assert_eq!(state.active_section(), id);
    }
}

#[test]
fn navigate_to_active_section_changes_nothing() {
    let state = navigate(NavState::default(), "skills", 100);
    let again = navigate(state.clone(), "skills", 250);
    assert_eq!(again, state);
}

#[test]
fn navigate_to_unknown_id_changes_nothing() {
    let state = NavState::default();
    let after = navigate(state.clone(), "bogus", 0);
    assert_eq!(after, state);
}

#[test]
fn exactly_one_section_active_during_transition() {
    let state = navigate(NavState::default(), "contact", 0);
    let active_count = SectionId::ALL
        .iter()
        .filter(|&&id| state.phase(id).is_active())
        .count();
    assert_eq!(active_count, 1);
    assert_eq!(state.active_section(), SectionId::Contact);
}

#[test]
fn target_variant_drives_both_directions() {
    let state = navigate(NavState::default(), "projects", 0);
    assert_eq!(
        state.phase(SectionId::Projects),
        SectionPhase::Entering {
            variant: Variant::Zoom,
            until_ms: TRANSITION_MS,
        }
    );
    assert_eq!(
        state.phase(SectionId::Home),
        SectionPhase::Exiting {
            variant: Variant::Zoom,
            until_ms: TRANSITION_MS,
        }
    );
}

#[test]
fn transient_phases_clear_after_fixed_delay() {
    let state = navigate(NavState::default(), "skills", 1000);

    let before = tick(state.clone(), 1000 + TRANSITION_MS - 1);
    assert!(!before.is_settled());

    let after = tick(state, 1000 + TRANSITION_MS);
    assert!(after.is_settled());
    assert_eq!(after.phase(SectionId::Skills), SectionPhase::Active);
    assert_eq!(after.phase(SectionId::Home), SectionPhase::Inactive);
}

#[test]
fn settle_is_idempotent() {
    let state = navigate(NavState::default(), "skills", 0);
    let once = tick(state, TRANSITION_MS);
    let twice = tick(once.clone(), TRANSITION_MS * 3);
    assert_eq!(once, twice);
}

#[test]
fn rapid_renavigation_leaves_stale_cleanup_harmless() {
    // Navigate away, then navigate again before the first cleanup fires.
    let state = navigate(NavState::default(), "skills", 0);
    let state = navigate(state, "contact", 200);

    assert_eq!(state.active_section(), SectionId::Contact);
    // Skills was overwritten to Exiting by the second navigation.
    assert!(matches!(
        state.phase(SectionId::Skills),
        SectionPhase::Exiting { .. }
    ));

    // The first navigation's deadline (600) passes without disturbing the
    // in-flight second transition; the later deadline settles everything.
    let mid = tick(state, 600);
    assert_eq!(mid.active_section(), SectionId::Contact);
    let done = tick(mid, 800);
    assert!(done.is_settled());
    assert_eq!(done.phase(SectionId::Skills), SectionPhase::Inactive);
}

#[test]
fn end_to_end_home_skills_contact() {
    let state = NavState::default();
    assert_eq!(state.active_section(), SectionId::Home);

    let state = navigate(state, "skills", 0);
    assert_eq!(state.active_section(), SectionId::Skills);

    let unchanged = navigate(state.clone(), "skills", 100);
    assert_eq!(unchanged, state);

    let state = navigate(state, "contact", 200);
    assert_eq!(state.active_section(), SectionId::Contact);

    let state = tick(state, 200 + TRANSITION_MS);
    assert!(!state.phase(SectionId::Skills).is_transient());
    assert!(state.is_settled());
}

#[test]
fn navigate_closes_menu() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::ToggleMenu);
    assert!(state.menu_open);
    let state = navigate(state, "articles", 0);
    assert!(!state.menu_open);
}

#[test]
fn menu_toggle_and_selection_wrap() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::ToggleMenu);
    assert!(state.menu_open);
    assert_eq!(state.menu_selected, SectionId::Home.index());

    let state = NavReducer::reduce(state, NavIntent::MenuUp);
    assert_eq!(state.menu_selected, SectionId::COUNT - 1);
    let state = NavReducer::reduce(state, NavIntent::MenuDown);
    assert_eq!(state.menu_selected, 0);

    let state = NavReducer::reduce(state, NavIntent::ToggleMenu);
    assert!(!state.menu_open);
}

#[test]
fn menu_selection_ignored_while_closed() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::MenuDown);
    assert_eq!(state.menu_selected, 0);
}
