use super::intent::Intent;
use super::state::State;

/// Derives the next state from the current one and an intent.
///
/// Reducers own every state transition and stay free of side effects:
/// id generation, clocks and logging belong to the caller.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
