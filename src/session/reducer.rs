use crate::mvi::Reducer;
use crate::resource::OperationStatus;

use super::intent::SessionIntent;
use super::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A running session stays valid while a new login is in flight.
            SessionIntent::LoginStarted => SessionState {
                status: OperationStatus::Loading,
                error: None,
                ..state
            },
            SessionIntent::LoginSucceeded { user, token }
            | SessionIntent::Restored { user, token } => SessionState {
                status: OperationStatus::Succeeded,
                user: Some(user),
                token: Some(token),
                error: None,
            },
            SessionIntent::LoginFailed { reason } => SessionState {
                status: OperationStatus::Failed,
                error: Some(reason),
                ..state
            },
            SessionIntent::LoggedOut => SessionState::default(),
        }
    }
}
