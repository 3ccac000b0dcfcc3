//! Shared helpers for building lifecycle events and entities.

#![allow(dead_code, unused_imports)]

use serde_json::{json, Value};
use stockroom::mvi::Reducer;
use stockroom::resource::{
    EntityId, Lifecycle, OperationError, ResourceAction, ResourceIntent, ResourceKind,
    ResourceReducer, ResourceState,
};

/// A minimal entity body.
pub fn entity(id: i64) -> Value {
    json!({ "id": id, "name": format!("item-{}", id) })
}

pub fn entities(ids: &[i64]) -> Vec<Value> {
    ids.iter().copied().map(entity).collect()
}

pub fn ids(state: &ResourceState) -> Vec<EntityId> {
    state.items().iter().map(|e| e.id().clone()).collect()
}

pub fn int_ids(raw: &[i64]) -> Vec<EntityId> {
    raw.iter().copied().map(EntityId::from).collect()
}

pub fn apply(state: ResourceState, kind: ResourceKind, action: ResourceAction) -> ResourceState {
    ResourceReducer::reduce(state, ResourceIntent::new(kind, action))
}

/// A store of `kind` whose last load returned `raw`.
pub fn loaded(kind: ResourceKind, raw: &[i64]) -> ResourceState {
    apply(
        ResourceState::default(),
        kind,
        ResourceAction::Load(Lifecycle::Succeeded(entities(raw))),
    )
}

pub fn failure(message: &str) -> OperationError {
    OperationError::from(message)
}
