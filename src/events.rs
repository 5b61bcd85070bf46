//! Outcome events published to the presentation layer.
//!
//! The controller emits one or more events per operation. The presentation
//! layer drains them to show notices and decide what to re-render.

use tokio::sync::mpsc;

use crate::entity::{DraftField, Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    ListLoaded { count: usize },
    ListLoadFailed { message: String },
    DetailLoaded { entity: Entity },
    DetailLoadFailed { id: EntityId, message: String },
    /// A detail response arrived after a newer one was requested and was
    /// discarded.
    DetailSuperseded { id: EntityId },
    VoteAdded { id: EntityId, votes: u32 },
    VotesReset { id: EntityId },
    VotesResetDeclined { id: EntityId },
    EntityCreated { entity: Entity },
    CreateFailed { message: String },
    ValidationFailed { field: DraftField },
}

impl BoardEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::ListLoaded { .. } => "list_loaded",
            BoardEvent::ListLoadFailed { .. } => "list_load_failed",
            BoardEvent::DetailLoaded { .. } => "detail_loaded",
            BoardEvent::DetailLoadFailed { .. } => "detail_load_failed",
            BoardEvent::DetailSuperseded { .. } => "detail_superseded",
            BoardEvent::VoteAdded { .. } => "vote_added",
            BoardEvent::VotesReset { .. } => "votes_reset",
            BoardEvent::VotesResetDeclined { .. } => "votes_reset_declined",
            BoardEvent::EntityCreated { .. } => "entity_created",
            BoardEvent::CreateFailed { .. } => "create_failed",
            BoardEvent::ValidationFailed { .. } => "validation_failed",
        }
    }

    /// True for events the presentation layer shows as an error notice.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BoardEvent::ListLoadFailed { .. }
                | BoardEvent::DetailLoadFailed { .. }
                | BoardEvent::CreateFailed { .. }
                | BoardEvent::ValidationFailed { .. }
        )
    }

    /// Notice text for the user, if the event warrants one.
    pub fn user_message(&self) -> Option<String> {
        match self {
            BoardEvent::ListLoadFailed { .. } => {
                Some("Error: make sure the collection server is running".to_string())
            }
            BoardEvent::DetailLoadFailed { .. } => Some("Failed to load details".to_string()),
            BoardEvent::EntityCreated { entity } => {
                Some(format!("{} has been added successfully!", entity.name))
            }
            BoardEvent::CreateFailed { .. } => {
                Some("Failed to add entry. Make sure the collection server is running.".to_string())
            }
            BoardEvent::ValidationFailed { .. } => {
                Some("Please fill in both the name and the image URL".to_string())
            }
            BoardEvent::ListLoaded { .. }
            | BoardEvent::DetailLoaded { .. }
            | BoardEvent::DetailSuperseded { .. }
            | BoardEvent::VoteAdded { .. }
            | BoardEvent::VotesReset { .. }
            | BoardEvent::VotesResetDeclined { .. } => None,
        }
    }
}

/// Create a connected sink/stream pair.
pub fn channel() -> (EventSink, EventStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink { tx }, EventStream { rx })
}

/// Sending half, held by the controller.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<BoardEvent>,
}

impl EventSink {
    pub fn emit(&self, event: BoardEvent) {
        tracing::debug!(event = event.kind(), "Board event");
        if self.tx.send(event).is_err() {
            tracing::trace!("Board event dropped (receiver gone)");
        }
    }
}

/// Receiving half, held by the presentation layer.
pub struct EventStream {
    rx: mpsc::UnboundedReceiver<BoardEvent>,
}

impl EventStream {
    pub async fn recv(&mut self) -> Option<BoardEvent> {
        self.rx.recv().await
    }

    /// Take every event already emitted without waiting.
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}
