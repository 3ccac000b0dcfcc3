use crate::mvi::Reducer;
use crate::resource::ResourceReducer;
use crate::session::SessionReducer;

use super::intent::AppIntent;
use super::state::AppState;

/// Routes each intent to the reducer that owns its slice.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Resource(intent) => {
                let slice = state.resource_mut(intent.kind);
                *slice = ResourceReducer::reduce(std::mem::take(slice), intent);
            }
            AppIntent::Session(intent) => {
                state.session = SessionReducer::reduce(std::mem::take(&mut state.session), intent);
            }
            AppIntent::Reset => state = AppState::default(),
        }
        state
    }
}
