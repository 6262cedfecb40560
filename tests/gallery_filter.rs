use termfolio::content::projects;
use termfolio::ui::gallery::{GalleryIntent, GalleryReducer, GalleryState, STAGGER_STEP_MS};
use termfolio::ui::mvi::Reducer;

fn select(state: GalleryState, category: &str, now_ms: u64) -> GalleryState {
    GalleryReducer::reduce(
        state,
        GalleryIntent::SelectCategory {
            category: category.to_string(),
            now_ms,
        },
    )
}

#[test]
fn categories_start_with_all_in_first_seen_order() {
    assert_eq!(projects::categories(), vec!["All", "Web", "App", "API"]);
}

#[test]
fn all_selects_the_full_catalog_in_order() {
    let filtered = projects::filter("All");
    assert_eq!(filtered.len(), projects::catalog().len());
    for (got, expected) in filtered.iter().zip(projects::catalog()) {
        assert_eq!(got.title, expected.title);
    }
}

#[test]
fn category_filter_preserves_catalog_order() {
    let web = projects::filter("Web");
    assert_eq!(web.len(), 2);
    assert_eq!(web[0].title, "Personal Portfolio");
    assert_eq!(web[1].title, "E-commerce Store");
    assert!(web.iter().all(|p| p.category == "Web"));
}

#[test]
fn unknown_category_yields_empty_list() {
    assert!(projects::filter("Nonexistent").is_empty());
}

#[test]
fn filtering_is_idempotent() {
    assert_eq!(projects::filter("App"), projects::filter("App"));
}

#[test]
fn default_filter_is_all() {
    let state = GalleryState::default();
    assert_eq!(state.selected, "All");
    assert_eq!(state.visible_projects().len(), projects::catalog().len());
}

#[test]
fn selecting_a_category_replaces_the_visible_list() {
    let state = select(GalleryState::default(), "API", 500);
    assert_eq!(state.selected, "API");
    assert_eq!(state.applied_at_ms, 500);
    let visible = state.visible_projects();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|p| p.category == "API"));
}

#[test]
fn reselecting_restarts_the_entrance_animation() {
    let state = select(GalleryState::default(), "Web", 100);
    let state = select(state, "Web", 900);
    assert_eq!(state.selected, "Web");
    assert_eq!(state.applied_at_ms, 900);
}

#[test]
fn cards_reveal_with_fixed_stagger() {
    let state = select(GalleryState::default(), "All", 1000);

    // Card 0 appears immediately; card k only after k * STAGGER_STEP_MS.
    assert_eq!(state.revealed_cards(6, 1000), 1);
    assert_eq!(state.revealed_cards(6, 1000 + STAGGER_STEP_MS - 1), 1);
    assert_eq!(state.revealed_cards(6, 1000 + STAGGER_STEP_MS), 2);
    assert_eq!(state.revealed_cards(6, 1000 + 3 * STAGGER_STEP_MS), 4);
    // Capped at the list length.
    assert_eq!(state.revealed_cards(6, 1000 + 100 * STAGGER_STEP_MS), 6);
}
