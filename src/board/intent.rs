use crate::entity::Entity;
use crate::mvi::Intent;

/// Intents dispatched to [`BoardReducer`](super::BoardReducer).
#[derive(Debug, Clone)]
pub enum BoardIntent {
    /// A full list fetch resolved successfully.
    ListLoaded { entities: Vec<Entity> },

    /// A detail fetch is about to be issued. Bumps the detail generation.
    DetailRequested,

    /// A detail fetch resolved. Applied only if `generation` is still the
    /// latest issued one.
    DetailLoaded { generation: u64, entity: Entity },

    /// Increment the selected entity's votes by one.
    AddVote,

    /// Set the selected entity's votes to zero. Confirmation has already
    /// been given by the time this is dispatched.
    ResetVotes,
}

impl Intent for BoardIntent {}
