use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::state::GalleryState;
use crate::ui::mvi::Reducer;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::SelectCategory { category, now_ms } => GalleryState {
                selected: category,
                applied_at_ms: now_ms,
            },
        }
    }
}
