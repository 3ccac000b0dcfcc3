//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Reducer folds intents into state.
///
/// Reducers never perform I/O and never fail: every outcome, including
/// backend failures, is a state transition.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply one intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
