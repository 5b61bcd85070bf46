use crate::entity::{Entity, EntityId};
use crate::mvi::ViewState;
use crate::store::EntityStore;

/// Which entity, if any, is shown in the detail view.
///
/// The selected entity is its own copy (from a single-item fetch), not a
/// reference into the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(Entity),
}

impl Selection {
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(entity) => Some(entity),
        }
    }

    pub fn id(&self) -> Option<&EntityId> {
        self.entity().map(|entity| &entity.id)
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    pub store: EntityStore,
    pub selection: Selection,
    /// Generation of the most recently issued detail fetch.
    pub detail_generation: u64,
}

impl ViewState for BoardState {}

impl BoardState {
    pub fn selected(&self) -> Option<&Entity> {
        self.selection.entity()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            entities: self.store.entities().to_vec(),
            selected: self.selection.entity().cloned(),
        }
    }
}

/// Owned copy of what the presentation layer renders after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    pub entities: Vec<Entity>,
    pub selected: Option<Entity>,
}

impl BoardSnapshot {
    /// True for the list row that should be highlighted.
    pub fn is_active(&self, id: &EntityId) -> bool {
        self.selected.as_ref().is_some_and(|entity| &entity.id == id)
    }
}
