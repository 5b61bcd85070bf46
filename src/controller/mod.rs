//! Selection and vote mutation over the board state.
//!
//! The controller owns the [`BoardState`] and is its only writer. Remote
//! calls are awaited outside the reducer; their results are dispatched as
//! intents, and every outcome is published on the [`EventStream`] returned
//! by [`Controller::new`].

mod error;

use std::sync::Arc;

use crate::board::{BoardIntent, BoardReducer, BoardSnapshot, BoardState};
use crate::client::{ClientError, CollectionClient};
use crate::entity::{Draft, Entity, EntityId};
use crate::events::{self, BoardEvent, EventSink, EventStream};
use crate::mvi::Reducer;
use crate::store::EntityStore;

pub use error::BoardError;

/// Answer to the reset confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Affirmed,
    Refused,
}

impl From<bool> for Confirmation {
    fn from(affirmed: bool) -> Self {
        if affirmed {
            Confirmation::Affirmed
        } else {
            Confirmation::Refused
        }
    }
}

/// Handle for one in-flight detail fetch.
///
/// Only the most recently issued ticket can change the selection, so
/// responses that resolve out of order never replace a newer pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    id: EntityId,
    generation: u64,
}

impl DetailTicket {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a resolved detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Applied,
    Superseded,
}

pub struct Controller<C> {
    client: Arc<C>,
    board: BoardState,
    events: EventSink,
}

impl<C: CollectionClient> Controller<C> {
    pub fn new(client: C) -> (Self, EventStream) {
        Self::with_shared(Arc::new(client))
    }

    /// Build around a client that is also used elsewhere, e.g. by tasks that
    /// resolve detail tickets concurrently.
    pub fn with_shared(client: Arc<C>) -> (Self, EventStream) {
        let (events, stream) = events::channel();
        let controller = Self {
            client,
            board: BoardState::default(),
            events,
        };
        (controller, stream)
    }

    pub fn client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    pub fn state(&self) -> &BoardState {
        &self.board
    }

    pub fn store(&self) -> &EntityStore {
        &self.board.store
    }

    pub fn selected(&self) -> Option<&Entity> {
        self.board.selected()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    fn dispatch(&mut self, intent: BoardIntent) {
        let state = std::mem::take(&mut self.board);
        self.board = BoardReducer::reduce(state, intent);
    }

    /// Fetch the whole collection and replace the store with it.
    ///
    /// On failure the store keeps its previous content.
    pub async fn load_all(&mut self) -> Result<usize, BoardError> {
        match self.client.list_all().await {
            Ok(entities) => {
                self.dispatch(BoardIntent::ListLoaded { entities });
                let count = self.board.store.len();
                tracing::info!(count, "Entity list loaded");
                self.events.emit(BoardEvent::ListLoaded { count });
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Entity list load failed");
                self.events.emit(BoardEvent::ListLoadFailed {
                    message: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Issue a ticket for a detail fetch of `id`. Any earlier ticket stops
    /// being able to change the selection.
    pub fn begin_select(&mut self, id: EntityId) -> DetailTicket {
        self.dispatch(BoardIntent::DetailRequested);
        DetailTicket {
            id,
            generation: self.board.detail_generation,
        }
    }

    /// Apply the result of the detail fetch behind `ticket`.
    ///
    /// A failure leaves the previous selection in place. A result for a
    /// superseded ticket is dropped whether it succeeded or not.
    pub fn finish_select(
        &mut self,
        ticket: DetailTicket,
        result: Result<Entity, ClientError>,
    ) -> Result<DetailOutcome, BoardError> {
        if ticket.generation != self.board.detail_generation {
            tracing::debug!(
                id = %ticket.id,
                generation = ticket.generation,
                latest = self.board.detail_generation,
                "Discarding superseded detail response"
            );
            self.events
                .emit(BoardEvent::DetailSuperseded { id: ticket.id });
            return Ok(DetailOutcome::Superseded);
        }

        match result {
            Ok(entity) => {
                self.dispatch(BoardIntent::DetailLoaded {
                    generation: ticket.generation,
                    entity: entity.clone(),
                });
                self.events.emit(BoardEvent::DetailLoaded { entity });
                Ok(DetailOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(id = %ticket.id, error = %err, "Entity detail load failed");
                self.events.emit(BoardEvent::DetailLoadFailed {
                    id: ticket.id,
                    message: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Fetch `id` and make it the current selection.
    pub async fn select(&mut self, id: &EntityId) -> Result<DetailOutcome, BoardError> {
        let ticket = self.begin_select(id.clone());
        let result = self.client.get_one(id).await;
        self.finish_select(ticket, result)
    }

    /// Add one vote to the selected entity. Returns the new count, or `None`
    /// when nothing is selected.
    pub fn add_vote(&mut self) -> Option<u32> {
        if !self.board.selection.is_selected() {
            return None;
        }

        self.dispatch(BoardIntent::AddVote);
        let entity = self.board.selected()?;
        let (id, votes) = (entity.id.clone(), entity.votes);

        tracing::debug!(id = %id, votes, "Vote added");
        self.events.emit(BoardEvent::VoteAdded { id, votes });
        Some(votes)
    }

    /// Confirmation question to put to the user before [`reset_votes`].
    ///
    /// [`reset_votes`]: Controller::reset_votes
    pub fn reset_prompt(&self) -> Option<String> {
        self.board.selected().map(|entity| {
            format!(
                "Are you sure you want to reset {}'s votes to 0?",
                entity.name
            )
        })
    }

    /// Zero the selected entity's votes if the user affirmed.
    ///
    /// Returns `None` when nothing is selected, otherwise whether the reset
    /// was applied. A refusal changes nothing.
    pub fn reset_votes(&mut self, confirmation: Confirmation) -> Option<bool> {
        let id = self.board.selection.id()?.clone();

        match confirmation {
            Confirmation::Affirmed => {
                self.dispatch(BoardIntent::ResetVotes);
                tracing::info!(id = %id, "Votes reset");
                self.events.emit(BoardEvent::VotesReset { id });
                Some(true)
            }
            Confirmation::Refused => {
                tracing::debug!(id = %id, "Vote reset declined");
                self.events.emit(BoardEvent::VotesResetDeclined { id });
                Some(false)
            }
        }
    }

    /// Validate and submit a new entity, then refresh the whole list.
    ///
    /// The selection is not touched. A failed refresh is reported through
    /// its own event and does not fail the create.
    pub async fn create_entity(&mut self, name: &str, image: &str) -> Result<Entity, BoardError> {
        let draft = match Draft::parse(name, image) {
            Ok(draft) => draft,
            Err(field) => {
                tracing::debug!(field = %field, "Draft rejected");
                self.events.emit(BoardEvent::ValidationFailed { field });
                return Err(BoardError::Validation { field });
            }
        };

        let created = match self.client.create(&draft).await {
            Ok(entity) => entity,
            Err(err) => {
                tracing::warn!(name = %draft.name(), error = %err, "Entity create failed");
                self.events.emit(BoardEvent::CreateFailed {
                    message: err.to_string(),
                });
                return Err(err.into());
            }
        };

        self.events.emit(BoardEvent::EntityCreated {
            entity: created.clone(),
        });

        if let Err(err) = self.load_all().await {
            tracing::warn!(error = %err, "List refresh after create failed");
        }

        Ok(created)
    }
}
