use super::intent::Intent;
use super::state::ViewState;

/// Pure state transition.
///
/// Implementations must not perform I/O; anything effectful happens in the
/// caller before or after `reduce`.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
