use serde::Serialize;

use crate::mvi::UiState;

use super::entity::{Entity, EntityId};
use super::kind::OperationKind;
use super::status::{OperationError, OperationState, OperationStatus};

/// Client-side snapshot of one resource collection.
///
/// Entity ids are unique within `items`. The collection only changes
/// through [`ResourceReducer`](super::ResourceReducer).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResourceState {
    items: Vec<Entity>,
    selected: Option<Entity>,
    load: OperationState,
    create: OperationState,
    update: OperationState,
    delete: OperationState,
    find_by_id: OperationState,
    /// Shared error that drives the global banner.
    error: Option<OperationError>,
}

impl UiState for ResourceState {}

impl ResourceState {
    /// Entities in arrival order.
    pub fn items(&self) -> &[Entity] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.items.iter().find(|entity| entity.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Entity fetched for a detail view; independent of `items`.
    pub fn selected(&self) -> Option<&Entity> {
        self.selected.as_ref()
    }

    pub fn operation(&self, kind: OperationKind) -> &OperationState {
        match kind {
            OperationKind::Load => &self.load,
            OperationKind::Create => &self.create,
            OperationKind::Update => &self.update,
            OperationKind::Delete => &self.delete,
            OperationKind::FindById => &self.find_by_id,
        }
    }

    pub fn status(&self, kind: OperationKind) -> OperationStatus {
        self.operation(kind).status()
    }

    /// Status of the collection itself (the load operation).
    pub fn load_status(&self) -> OperationStatus {
        self.load.status()
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    pub(super) fn operation_mut(&mut self, kind: OperationKind) -> &mut OperationState {
        match kind {
            OperationKind::Load => &mut self.load,
            OperationKind::Create => &mut self.create,
            OperationKind::Update => &mut self.update,
            OperationKind::Delete => &mut self.delete,
            OperationKind::FindById => &mut self.find_by_id,
        }
    }

    pub(super) fn set_error(&mut self, error: Option<OperationError>) {
        self.error = error;
    }

    pub(super) fn set_selected(&mut self, entity: Entity) {
        self.selected = Some(entity);
    }

    /// Overwrite the collection. Callers pass unique ids.
    pub(super) fn replace_all(&mut self, items: Vec<Entity>) {
        self.items = items;
    }

    /// Append unless the id is already present.
    pub(super) fn append_unique(&mut self, entity: Entity) -> bool {
        if self.contains(entity.id()) {
            return false;
        }
        self.items.push(entity);
        true
    }

    /// Replace the entity with the same id, keeping its position.
    pub(super) fn replace(&mut self, entity: Entity) -> bool {
        if self.selected.as_ref().map(Entity::id) == Some(entity.id()) {
            self.selected = Some(entity.clone());
        }
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub(super) fn remove(&mut self, id: &EntityId) -> bool {
        if self.selected.as_ref().map(Entity::id) == Some(id) {
            self.selected = None;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}
