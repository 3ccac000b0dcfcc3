use std::collections::HashSet;

use serde_json::Value;

use crate::mvi::Reducer;

use super::entity::Entity;
use super::intent::{Lifecycle, ResourceAction, ResourceIntent};
use super::kind::{ErrorPolicy, OperationKind, ResourceKind};
use super::state::ResourceState;
use super::status::OperationError;

/// Applies lifecycle events to one resource store.
pub struct ResourceReducer;

impl Reducer for ResourceReducer {
    type State = ResourceState;
    type Intent = ResourceIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let ResourceIntent { kind, action } = intent;
        match action {
            ResourceAction::Load(lifecycle) => match lifecycle {
                Lifecycle::Started => {
                    state.operation_mut(OperationKind::Load).start();
                    state.set_error(None);
                }
                Lifecycle::Succeeded(values) => {
                    state.replace_all(collect_entities(kind, values));
                    state.operation_mut(OperationKind::Load).succeed();
                }
                Lifecycle::Failed(reason) => {
                    fail(&mut state, kind, OperationKind::Load, reason);
                }
            },

            ResourceAction::Create(lifecycle) => match lifecycle {
                Lifecycle::Started => start(&mut state, OperationKind::Create),
                Lifecycle::Succeeded(value) => {
                    state.operation_mut(OperationKind::Create).succeed();
                    match Entity::try_from(value) {
                        Ok(entity) => {
                            let id = entity.id().clone();
                            if !state.append_unique(entity) {
                                tracing::debug!(resource = %kind, id = %id, "Created entity already present");
                            }
                        }
                        Err(reason) => {
                            // Acknowledgement only; the caller reloads.
                            tracing::debug!(resource = %kind, %reason, "Create acknowledged without entity body");
                        }
                    }
                }
                Lifecycle::Failed(reason) => fail(&mut state, kind, OperationKind::Create, reason),
            },

            ResourceAction::Update(lifecycle) => match lifecycle {
                Lifecycle::Started => start(&mut state, OperationKind::Update),
                Lifecycle::Succeeded(value) => {
                    state.operation_mut(OperationKind::Update).succeed();
                    match Entity::try_from(value) {
                        Ok(entity) => {
                            let id = entity.id().clone();
                            if !state.replace(entity) {
                                tracing::debug!(resource = %kind, id = %id, "Updated entity not in collection");
                            }
                        }
                        Err(reason) => {
                            tracing::warn!(resource = %kind, %reason, "Ignoring update response");
                        }
                    }
                }
                Lifecycle::Failed(reason) => fail(&mut state, kind, OperationKind::Update, reason),
            },

            ResourceAction::Delete(lifecycle) => match lifecycle {
                Lifecycle::Started => start(&mut state, OperationKind::Delete),
                Lifecycle::Succeeded(id) => {
                    state.operation_mut(OperationKind::Delete).succeed();
                    if !state.remove(&id) {
                        tracing::debug!(resource = %kind, id = %id, "Deleted entity not in collection");
                    }
                }
                Lifecycle::Failed(reason) => fail(&mut state, kind, OperationKind::Delete, reason),
            },

            ResourceAction::FindById(lifecycle) => match lifecycle {
                Lifecycle::Started => start(&mut state, OperationKind::FindById),
                Lifecycle::Succeeded(value) => {
                    state.operation_mut(OperationKind::FindById).succeed();
                    match Entity::try_from(value) {
                        Ok(entity) => state.set_selected(entity),
                        Err(reason) => {
                            tracing::warn!(resource = %kind, %reason, "Ignoring find-by-id response");
                        }
                    }
                }
                Lifecycle::Failed(reason) => fail(&mut state, kind, OperationKind::FindById, reason),
            },
        }
        state
    }
}

/// Start a non-load operation. A shared error that this same operation
/// raised earlier is cleared with it.
fn start(state: &mut ResourceState, operation: OperationKind) {
    let previous = state.operation_mut(operation).start();
    if previous.is_some() && state.error() == previous.as_ref() {
        state.set_error(None);
    }
}

fn fail(state: &mut ResourceState, kind: ResourceKind, operation: OperationKind, reason: OperationError) {
    let policy = if operation.is_write() {
        kind.error_policy()
    } else {
        ErrorPolicy::Surface
    };
    match policy {
        ErrorPolicy::Surface => {
            tracing::debug!(resource = %kind, %operation, %reason, "Operation failed");
            state.operation_mut(operation).fail(Some(reason.clone()));
            state.set_error(Some(reason));
        }
        ErrorPolicy::Local => {
            tracing::debug!(resource = %kind, %operation, "Operation failed, reason left to caller");
            state.operation_mut(operation).fail(None);
        }
    }
}

/// Convert a load payload into entities, keeping order. Records without an
/// id and repeated ids are dropped so the collection stays keyed by id.
fn collect_entities(kind: ResourceKind, values: Vec<Value>) -> Vec<Entity> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut entities = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match Entity::try_from(value) {
            Ok(entity) => {
                if seen.insert(entity.id().clone()) {
                    entities.push(entity);
                } else {
                    tracing::warn!(resource = %kind, index, id = %entity.id(), "Dropping duplicate id in load result");
                }
            }
            Err(reason) => {
                tracing::warn!(resource = %kind, index, %reason, "Dropping malformed record in load result");
            }
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{EntityId, OperationStatus};
    use serde_json::json;

    fn reduce(state: ResourceState, kind: ResourceKind, action: ResourceAction) -> ResourceState {
        ResourceReducer::reduce(state, ResourceIntent::new(kind, action))
    }

    #[test]
    fn load_drops_records_without_id() {
        let state = reduce(
            ResourceState::default(),
            ResourceKind::Supplies,
            ResourceAction::Load(Lifecycle::Succeeded(vec![
                json!({"id": 1}),
                json!({"name": "orphan"}),
                json!({"id": 2}),
            ])),
        );
        let ids: Vec<_> = state.items().iter().map(|e| e.id().clone()).collect();
        assert_eq!(ids, vec![EntityId::Int(1), EntityId::Int(2)]);
    }

    #[test]
    fn load_keeps_first_of_duplicate_ids() {
        let state = reduce(
            ResourceState::default(),
            ResourceKind::Products,
            ResourceAction::Load(Lifecycle::Succeeded(vec![
                json!({"id": 1, "name": "first"}),
                json!({"id": 1, "name": "second"}),
            ])),
        );
        assert_eq!(state.len(), 1);
        assert_eq!(state.items()[0].get("name"), Some(&json!("first")));
    }

    #[test]
    fn retrying_create_clears_the_error_it_raised() {
        let state = reduce(
            ResourceState::default(),
            ResourceKind::Products,
            ResourceAction::Create(Lifecycle::Failed("duplicate sku".into())),
        );
        assert_eq!(state.error(), Some(&OperationError::from("duplicate sku")));

        let state = reduce(state, ResourceKind::Products, ResourceAction::Create(Lifecycle::Started));
        assert_eq!(state.status(OperationKind::Create), OperationStatus::Loading);
        assert!(state.error().is_none());
    }

    #[test]
    fn retrying_create_keeps_a_load_error() {
        let state = reduce(
            ResourceState::default(),
            ResourceKind::Products,
            ResourceAction::Load(Lifecycle::Failed("offline".into())),
        );
        let state = reduce(state, ResourceKind::Products, ResourceAction::Create(Lifecycle::Started));
        assert_eq!(state.error(), Some(&OperationError::from("offline")));
    }
}
