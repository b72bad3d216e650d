//! Reducer trait for the MVI features.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// Must be a pure function: `(State, Intent) -> State`, no side effects.
/// Spawning fetches and publishing state is the view-model's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
