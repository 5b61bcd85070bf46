use crate::mvi::Reducer;

use super::intent::BoardIntent;
use super::state::{BoardState, Selection};

/// Reducer for board transitions.
///
/// Vote mutations change the selected copy first and then write the new
/// count into the store by id. The store write is a no-op when the entity
/// is no longer listed.
pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoardIntent::ListLoaded { entities } => {
                state.store.replace_all(entities);
                state
            }

            BoardIntent::DetailRequested => {
                state.detail_generation = state.detail_generation.wrapping_add(1);
                state
            }

            BoardIntent::DetailLoaded { generation, entity } => {
                if generation == state.detail_generation {
                    state.selection = Selection::Selected(entity);
                }
                state
            }

            BoardIntent::AddVote => match state.selection {
                Selection::Selected(mut entity) => {
                    entity.votes = entity.votes.saturating_add(1);
                    state.store.set_votes(&entity.id, entity.votes);
                    state.selection = Selection::Selected(entity);
                    state
                }
                Selection::Unselected => state,
            },

            BoardIntent::ResetVotes => match state.selection {
                Selection::Selected(mut entity) => {
                    entity.votes = 0;
                    state.store.set_votes(&entity.id, 0);
                    state.selection = Selection::Selected(entity);
                    state
                }
                Selection::Unselected => state,
            },
        }
    }
}
